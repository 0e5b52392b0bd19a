//! `[env]` and `[analytics]` section configuration.
//!
//! `[env]` names the environment variables that feed each override. The
//! values themselves never live in portal.toml.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[env]` section in portal.toml - override name → environment variable.
///
/// # Example
/// ```toml
/// [env]
/// analytics_id = "GOOGLE_ANALYTICS_ID"
/// tag_manager_id = "GOOGLE_TAG_MANAGER_ID"
/// canonical_url = "SITE_URL"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct EnvConfig {
    /// Variable holding the analytics tracking id (gtag).
    #[serde(default = "defaults::env::analytics_id")]
    #[educe(Default = defaults::env::analytics_id())]
    pub analytics_id: String,

    /// Variable holding the tag manager container id.
    #[serde(default = "defaults::env::tag_manager_id")]
    #[educe(Default = defaults::env::tag_manager_id())]
    pub tag_manager_id: String,

    /// Variable that replaces `[base].url` when set.
    #[serde(default = "defaults::env::canonical_url")]
    #[educe(Default = defaults::env::canonical_url())]
    pub canonical_url: String,
}

/// `[analytics]` section - static options of the analytics features.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct AnalyticsConfig {
    #[serde(default = "defaults::r#false")]
    #[educe(Default = false)]
    pub anonymize_ip: bool,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;

    #[test]
    fn test_env_defaults() {
        let config = r#"
            [base]
            title = "Test"
            url = "https://example.com"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.env.analytics_id, "GOOGLE_ANALYTICS_ID");
        assert_eq!(config.env.tag_manager_id, "GOOGLE_TAG_MANAGER_ID");
        assert_eq!(config.env.canonical_url, "SITE_URL");
        assert!(!config.analytics.anonymize_ip);
    }

    #[test]
    fn test_env_custom_names() {
        let config = r#"
            [base]
            title = "Test"
            url = "https://example.com"

            [env]
            analytics_id = "GA_ID"

            [analytics]
            anonymize_ip = true
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.env.analytics_id, "GA_ID");
        assert_eq!(config.env.tag_manager_id, "GOOGLE_TAG_MANAGER_ID");
        assert!(config.analytics.anonymize_ip);
    }
}
