//! `[targets.<name>]` deployment target overlays.
//!
//! One descriptor can describe several deployments (e.g. a GitHub Pages
//! mirror and the production domain). Each target only lists the fields it
//! changes; the active target is always chosen explicitly by the caller.

use serde::{Deserialize, Serialize};

/// Overlay applied on top of the descriptor when the target is selected.
///
/// # Example
/// ```toml
/// [targets.github-pages]
/// url = "https://devsecblueprint.github.io"
/// organization = "The-DevSec-Blueprint"
/// social_metadata = false
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TargetConfig {
    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub base_path: Option<String>,

    #[serde(default)]
    pub organization: Option<String>,

    #[serde(default)]
    pub project: Option<String>,

    #[serde(default)]
    pub locales: Option<Vec<String>>,

    #[serde(default)]
    pub default_locale: Option<String>,

    #[serde(default)]
    pub social_card: Option<String>,

    /// `false` drops Open Graph and Twitter records from `[[metadata]]`.
    #[serde(default)]
    pub social_metadata: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;
    use super::*;

    #[test]
    fn test_targets_parse() {
        let config = r#"
            [base]
            title = "Test"
            url = "https://example.com"

            [targets.production]

            [targets.mirror]
            url = "https://mirror.example.org"
            locales = ["en", "es"]
            social_metadata = false
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.targets.len(), 2);
        assert_eq!(config.targets["production"], TargetConfig::default());

        let mirror = &config.targets["mirror"];
        assert_eq!(mirror.url.as_deref(), Some("https://mirror.example.org"));
        assert_eq!(mirror.locales.as_deref(), Some(&["en".to_string(), "es".to_string()][..]));
        assert_eq!(mirror.social_metadata, Some(false));
        assert_eq!(mirror.base_path, None);
    }
}
