//! Sitemap generation.
//!
//! Filters the generator's candidates and writes the published `sitemap.xml`.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://example.com/</loc>
//!     <lastmod>2025-01-01</lastmod>
//!     <changefreq>weekly</changefreq>
//!     <priority>0.5</priority>
//!   </url>
//! </urlset>
//! ```

use super::filter::{SitemapError, SitemapItem, filter};
use crate::{config::LastmodStrategy, log, manifest::ResolvedManifest};
use anyhow::{Context, Result};
use chrono::SecondsFormat;
use std::{fs, path::Path};

// ============================================================================
// Constants
// ============================================================================

/// XML namespace for sitemap
const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

// ============================================================================
// Public API
// ============================================================================

/// Filter candidates and write the sitemap if enabled in the manifest.
pub fn build_sitemap(
    manifest: &ResolvedManifest,
    candidates: Vec<SitemapItem>,
    path: &Path,
) -> Result<()> {
    if !manifest.sitemap.enable {
        log!("sitemap"; "disabled, skipping");
        return Ok(());
    }

    let total = candidates.len();
    let sitemap = Sitemap::from_candidates(manifest, candidates)?;
    let kept = sitemap.urls.len();
    sitemap.write(path)?;

    log!("sitemap"; "{} ({kept}/{total} urls)", path.display());
    Ok(())
}

// ============================================================================
// Sitemap Implementation
// ============================================================================

/// Sitemap data structure
pub struct Sitemap {
    /// List of URL entries
    urls: Vec<UrlEntry>,
}

/// Single URL entry in the sitemap
struct UrlEntry {
    /// Full URL location
    loc: String,
    /// Already formatted per the lastmod strategy
    lastmod: Option<String>,
    changefreq: &'static str,
    priority: f32,
}

impl Sitemap {
    /// Apply the manifest's exclusion patterns and build the entries.
    pub fn from_candidates(
        manifest: &ResolvedManifest,
        candidates: Vec<SitemapItem>,
    ) -> Result<Self, SitemapError> {
        let config = &manifest.sitemap;
        let published = filter(candidates, config.ignore_patterns.as_slice())?;

        // `filter` rejects records without a url, so every survivor has one
        let urls = published
            .iter()
            .filter_map(|item| {
                let url = item.url()?;
                Some(UrlEntry {
                    loc: manifest.site.absolute_url(url),
                    lastmod: item.lastmod.and_then(|at| match config.lastmod {
                        LastmodStrategy::Date => Some(at.format("%Y-%m-%d").to_string()),
                        LastmodStrategy::Datetime => {
                            Some(at.to_rfc3339_opts(SecondsFormat::Secs, true))
                        }
                        LastmodStrategy::None => None,
                    }),
                    changefreq: config.changefreq.as_str(),
                    priority: config.priority,
                })
            })
            .collect();

        Ok(Self { urls })
    }

    /// Generate sitemap XML string.
    pub fn into_xml(self) -> String {
        let mut xml = String::with_capacity(4096);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        xml.push('\n');
        xml.push_str(&format!(r#"<urlset xmlns="{SITEMAP_NS}">"#));
        xml.push('\n');

        for entry in self.urls {
            xml.push_str("  <url>\n");
            xml.push_str(&format!("    <loc>{}</loc>\n", escape_xml(&entry.loc)));
            if let Some(lastmod) = entry.lastmod {
                xml.push_str(&format!("    <lastmod>{lastmod}</lastmod>\n"));
            }
            xml.push_str(&format!("    <changefreq>{}</changefreq>\n", entry.changefreq));
            xml.push_str(&format!("    <priority>{:.1}</priority>\n", entry.priority));
            xml.push_str("  </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }

    /// Write sitemap to output file.
    fn write(self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(path, self.into_xml())
            .with_context(|| format!("Failed to write sitemap to {}", path.display()))?;
        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Escape special XML characters.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

// ============================================================================
// Tests
// ============================================================================
