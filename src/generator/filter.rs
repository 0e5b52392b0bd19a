//! Sitemap item filter.
//!
//! The external sitemap generator hands over every candidate URL of the build,
//! including pagination artifacts (`/page/2`, ...) that should never be
//! indexed. [`filter`] drops records whose URL contains any exclusion pattern.
//!
//! The filter is a pure predicate over the sequence: surviving records keep
//! their order and content, and applying it twice changes nothing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Sitemap filter errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SitemapError {
    /// The generator produced a record without a URL. This is a bug in the
    /// calling pipeline, not a condition to recover from.
    #[error("sitemap candidate #{index} has no url")]
    ContractViolation { index: usize },
}

/// One candidate page as supplied by the sitemap generator.
///
/// `url` is optional only so that malformed input is representable and can be
/// rejected; a valid record always carries a non-empty URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SitemapItem {
    #[serde(default)]
    pub url: Option<String>,

    /// Last modification time (RFC 3339 on the wire).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lastmod: Option<DateTime<Utc>>,
}

impl SitemapItem {
    /// The URL, if present and non-empty.
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref().filter(|url| !url.is_empty())
    }
}

#[cfg(test)]
impl SitemapItem {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            lastmod: None,
        }
    }

    pub fn with_lastmod(mut self, lastmod: DateTime<Utc>) -> Self {
        self.lastmod = Some(lastmod);
        self
    }
}

/// Drop every candidate whose URL contains one of `patterns` as a substring.
///
/// Empty patterns are ignored; with no effective pattern the input is
/// returned unchanged. Fails fast with [`SitemapError::ContractViolation`] on
/// the first record lacking a URL.
pub fn filter<P: AsRef<str>>(
    candidates: Vec<SitemapItem>,
    patterns: &[P],
) -> Result<Vec<SitemapItem>, SitemapError> {
    let patterns: Vec<&str> = patterns
        .iter()
        .map(AsRef::as_ref)
        .filter(|p| !p.is_empty())
        .collect();

    let mut published = Vec::with_capacity(candidates.len());
    for (index, item) in candidates.into_iter().enumerate() {
        let url = item.url().ok_or(SitemapError::ContractViolation { index })?;
        if !patterns.iter().any(|pattern| url.contains(pattern)) {
            published.push(item);
        }
    }
    Ok(published)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const NO_PATTERNS: &[&str] = &[];
    const PAGINATION: &[&str] = &["/page/"];

    fn items(urls: &[&str]) -> Vec<SitemapItem> {
        urls.iter().map(|url| SitemapItem::new(*url)).collect()
    }

    fn urls(items: &[SitemapItem]) -> Vec<&str> {
        items.iter().filter_map(SitemapItem::url).collect()
    }

    #[test]
    fn test_filter_drops_pagination() {
        let candidates = items(&[
            "https://site/docs/a",
            "https://site/docs/page/2",
            "https://site/blog",
        ]);
        let published = filter(candidates, PAGINATION).unwrap();

        assert_eq!(urls(&published), ["https://site/docs/a", "https://site/blog"]);
    }

    #[test]
    fn test_filter_empty_patterns_is_identity() {
        let candidates = items(&["https://site/b", "https://site/page/3", "https://site/a"]);
        let published = filter(candidates.clone(), NO_PATTERNS).unwrap();

        assert_eq!(published, candidates);
    }

    #[test]
    fn test_filter_blank_pattern_ignored() {
        let candidates = items(&["https://site/a", "https://site/b"]);
        let published = filter(candidates.clone(), &[""]).unwrap();

        assert_eq!(published, candidates);
    }

    #[test]
    fn test_filter_empty_candidates() {
        let published = filter(Vec::new(), PAGINATION).unwrap();
        assert!(published.is_empty());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let candidates = items(&[
            "https://site/page/1",
            "https://site/docs/intro",
            "https://site/tags/rust",
            "https://site/docs/page/9",
            "https://site/docs/outro",
        ]);
        let patterns = ["/page/", "/tags/"];

        let once = filter(candidates, &patterns).unwrap();
        let twice = filter(once.clone(), &patterns).unwrap();

        assert_eq!(once, twice);
    }

    #[test]
    fn test_filter_preserves_order_and_content() {
        let when = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let candidates = vec![
            SitemapItem::new("https://site/z").with_lastmod(when),
            SitemapItem::new("https://site/page/2"),
            SitemapItem::new("https://site/a"),
            SitemapItem::new("https://site/z"),
        ];
        let published = filter(candidates, PAGINATION).unwrap();

        assert_eq!(urls(&published), ["https://site/z", "https://site/a", "https://site/z"]);
        assert_eq!(published[0].lastmod, Some(when));
        assert_eq!(published[2].lastmod, None);
    }

    #[test]
    fn test_filter_any_pattern_excludes() {
        let candidates = items(&["https://site/tags/x", "https://site/page/2", "https://site/ok"]);
        let published = filter(candidates, &["/tags/", "/page/"]).unwrap();

        assert_eq!(urls(&published), ["https://site/ok"]);
    }

    #[test]
    fn test_filter_missing_url_fails_fast() {
        let candidates = vec![
            SitemapItem::new("https://site/a"),
            SitemapItem {
                url: None,
                lastmod: None,
            },
            SitemapItem::new(""),
        ];
        let err = filter(candidates, PAGINATION).unwrap_err();

        assert_eq!(err, SitemapError::ContractViolation { index: 1 });
        assert_eq!(err.to_string(), "sitemap candidate #1 has no url");
    }

    #[test]
    fn test_filter_empty_url_is_violation() {
        let err = filter(items(&["https://site/a", ""]), NO_PATTERNS).unwrap_err();
        assert_eq!(err, SitemapError::ContractViolation { index: 1 });
    }

    #[test]
    fn test_sitemap_item_json() {
        let parsed: Vec<SitemapItem> = serde_json::from_str(
            r#"[
                {"url": "https://site/a", "lastmod": "2025-01-01T10:00:00Z"},
                {"url": "https://site/b"},
                {"lastmod": "2025-01-01T10:00:00Z"}
            ]"#,
        )
        .unwrap();

        assert_eq!(
            parsed[0].lastmod,
            Some(Utc.with_ymd_and_hms(2025, 1, 1, 10, 0, 0).unwrap())
        );
        assert_eq!(parsed[1].lastmod, None);
        assert_eq!(parsed[2].url(), None);
    }
}
