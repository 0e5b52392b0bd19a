//! `[sitemap]` section configuration.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `<changefreq>` values from the sitemap protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFreq {
    Always,
    Hourly,
    Daily,
    #[default]
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFreq {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
            Self::Never => "never",
        }
    }
}

/// How `<lastmod>` is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LastmodStrategy {
    /// `YYYY-MM-DD`
    #[default]
    Date,
    /// Full RFC 3339 timestamp.
    Datetime,
    /// Omit `<lastmod>` entirely.
    None,
}

/// `[sitemap]` section in portal.toml.
///
/// # Example
/// ```toml
/// [sitemap]
/// changefreq = "weekly"
/// priority = 0.5
/// lastmod = "date"
/// ignore_patterns = ["/page/", "/tags/"]
/// ```
#[derive(Debug, Clone, PartialEq, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SitemapConfig {
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub enable: bool,

    /// Output file name, relative to the output directory.
    #[serde(default = "defaults::sitemap::filename")]
    #[educe(Default = defaults::sitemap::filename())]
    pub filename: String,

    #[serde(default = "defaults::sitemap::changefreq")]
    #[educe(Default = defaults::sitemap::changefreq())]
    pub changefreq: ChangeFreq,

    /// Must lie in `[0.0, 1.0]`.
    #[serde(default = "defaults::sitemap::priority")]
    #[educe(Default = defaults::sitemap::priority())]
    pub priority: f32,

    #[serde(default = "defaults::sitemap::lastmod")]
    #[educe(Default = defaults::sitemap::lastmod())]
    pub lastmod: LastmodStrategy,

    /// Substrings; any URL containing one is dropped from the sitemap.
    #[serde(default = "defaults::sitemap::ignore_patterns")]
    #[educe(Default = defaults::sitemap::ignore_patterns())]
    pub ignore_patterns: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;
    use super::*;

    #[test]
    fn test_sitemap_defaults() {
        let config = r#"
            [base]
            title = "Test"
            url = "https://example.com"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert!(config.sitemap.enable);
        assert_eq!(config.sitemap.filename, "sitemap.xml");
        assert_eq!(config.sitemap.changefreq, ChangeFreq::Weekly);
        assert_eq!(config.sitemap.priority, 0.5);
        assert_eq!(config.sitemap.lastmod, LastmodStrategy::Date);
        assert_eq!(config.sitemap.ignore_patterns, vec!["/page/"]);
    }

    #[test]
    fn test_sitemap_empty_patterns() {
        let config = r#"
            [base]
            title = "Test"
            url = "https://example.com"

            [sitemap]
            ignore_patterns = []
            lastmod = "none"
            changefreq = "daily"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert!(config.sitemap.ignore_patterns.is_empty());
        assert_eq!(config.sitemap.lastmod, LastmodStrategy::None);
        assert_eq!(config.sitemap.changefreq.as_str(), "daily");
    }

    #[test]
    fn test_changefreq_invalid() {
        let config = r#"
            [base]
            title = "Test"
            url = "https://example.com"

            [sitemap]
            changefreq = "fortnightly"
        "#;
        let result: Result<SiteConfig, _> = toml::from_str(config);
        assert!(result.is_err());
    }
}
