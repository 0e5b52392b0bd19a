//! Site descriptor management for `portal.toml`.
//!
//! # Sections
//!
//! | Section          | Purpose                                            |
//! |------------------|----------------------------------------------------|
//! | `[base]`         | Site identity (title, tagline, url, base path)     |
//! | `[i18n]`         | Declared locales and the default locale            |
//! | `[navbar]`       | Logo and ordered navigation items                  |
//! | `[footer]`       | Footer style and link groups                       |
//! | `[theme]`        | Custom CSS, code themes, image zoom, announcement  |
//! | `[build]`        | Plugins, docs source, broken-link policies         |
//! | `[[metadata]]`   | SEO / social `<meta>` records, in emission order   |
//! | `[sitemap]`      | Sitemap exclusion patterns and entry defaults      |
//! | `[env]`          | Environment variables feeding each override        |
//! | `[analytics]`    | Static options of the analytics features           |
//! | `[targets.*]`    | Deployment target overlays                         |
//!
//! The descriptor is only *parsed* here. Invariants (locales, navigation,
//! footer) are checked during manifest resolution, where every violation
//! is collected at once.
//!
//! # Example
//!
//! ```toml
//! [base]
//! title = "DSB"
//! tagline = "DevSec Blueprint"
//! url = "https://devsecblueprint.com"
//!
//! [i18n]
//! default_locale = "en"
//! locales = ["en", "es", "fr"]
//!
//! [sitemap]
//! ignore_patterns = ["/page/"]
//! ```

mod base;
mod build;
pub mod defaults;
mod env;
mod error;
mod footer;
mod i18n;
mod metadata;
mod navbar;
mod sitemap;
mod target;
mod theme;

pub use base::BaseConfig;
pub use build::{BrokenLinkPolicy, BuildConfig, DocsConfig};
pub use env::{AnalyticsConfig, EnvConfig};
pub use error::ConfigError;
pub use footer::{FooterConfig, FooterGroup};
pub use i18n::I18nConfig;
pub use metadata::MetadataRecord;
pub use navbar::{LogoConfig, NavItemConfig, NavPosition, NavbarConfig};
pub use sitemap::{ChangeFreq, LastmodStrategy, SitemapConfig};
pub use target::TargetConfig;
pub use theme::ThemeConfig;

use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fs, path::Path};

// ============================================================================
// Root Configuration
// ============================================================================

/// Root descriptor structure representing portal.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Site identity
    pub base: BaseConfig,

    /// Declared locales
    #[serde(default)]
    pub i18n: I18nConfig,

    /// Navigation bar
    #[serde(default)]
    pub navbar: NavbarConfig,

    /// Footer link groups
    #[serde(default)]
    pub footer: FooterConfig,

    /// Presentation settings
    #[serde(default)]
    pub theme: ThemeConfig,

    /// Pipeline settings
    #[serde(default)]
    pub build: BuildConfig,

    /// SEO / social records
    #[serde(default)]
    pub metadata: Vec<MetadataRecord>,

    /// Sitemap settings
    #[serde(default)]
    pub sitemap: SitemapConfig,

    /// Environment variable names
    #[serde(default)]
    pub env: EnvConfig,

    /// Analytics options
    #[serde(default)]
    pub analytics: AnalyticsConfig,

    /// Deployment targets, keyed by name
    #[serde(default)]
    pub targets: BTreeMap<String, TargetConfig>,
}

impl SiteConfig {
    /// Parse descriptor from TOML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Load descriptor from file path
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Names of all declared deployment targets, sorted.
    pub fn target_names(&self) -> impl Iterator<Item = &str> {
        self.targets.keys().map(String::as_str)
    }
}

// ============================================================================
// Tests
// ============================================================================
