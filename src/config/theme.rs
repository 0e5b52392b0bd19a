//! `[theme]` section configuration.
//!
//! Presentation settings handed through to the rendering pipeline untouched.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[theme]` section in portal.toml.
///
/// # Example
/// ```toml
/// [theme]
/// custom_css = "./src/css/custom.css"
///
/// [theme.prism]
/// light = "github"
/// dark = "dracula"
///
/// [theme.announcement]
/// id = "announcement"
/// content = "Give the project a star!"
/// closeable = false
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct ThemeConfig {
    /// Stylesheet layered on top of the base theme.
    #[serde(default = "defaults::theme::custom_css")]
    #[educe(Default = defaults::theme::custom_css())]
    pub custom_css: String,

    #[serde(default)]
    pub prism: PrismConfig,

    #[serde(default)]
    pub zoom: ZoomConfig,

    /// Dismissable banner above the navbar.
    #[serde(default)]
    pub announcement: Option<AnnouncementConfig>,
}

/// `[theme.prism]` - code block highlighting themes.
#[derive(Debug, Clone, PartialEq, Eq, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct PrismConfig {
    #[serde(default = "defaults::theme::prism::light")]
    #[educe(Default = defaults::theme::prism::light())]
    pub light: String,

    #[serde(default = "defaults::theme::prism::dark")]
    #[educe(Default = defaults::theme::prism::dark())]
    pub dark: String,
}

/// `[theme.zoom]` - image zoom plugin settings.
#[derive(Debug, Clone, PartialEq, Eq, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct ZoomConfig {
    /// CSS selector of zoomable images.
    #[serde(default = "defaults::theme::zoom::selector")]
    #[educe(Default = defaults::theme::zoom::selector())]
    pub selector: String,

    #[serde(default = "defaults::theme::zoom::background_light")]
    #[educe(Default = defaults::theme::zoom::background_light())]
    pub background_light: String,

    #[serde(default = "defaults::theme::zoom::background_dark")]
    #[educe(Default = defaults::theme::zoom::background_dark())]
    pub background_dark: String,
}

/// `[theme.announcement]`
#[derive(Debug, Clone, PartialEq, Eq, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct AnnouncementConfig {
    /// Stable id; changing it re-shows the bar to users who dismissed it.
    pub id: String,

    /// Trusted HTML.
    pub content: String,

    #[serde(default = "defaults::theme::announcement::background_color")]
    #[educe(Default = defaults::theme::announcement::background_color())]
    pub background_color: String,

    #[serde(default = "defaults::theme::announcement::text_color")]
    #[educe(Default = defaults::theme::announcement::text_color())]
    pub text_color: String,

    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub closeable: bool,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;

    #[test]
    fn test_theme_defaults() {
        let config = r#"
            [base]
            title = "Test"
            url = "https://example.com"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.theme.custom_css, "./src/css/custom.css");
        assert_eq!(config.theme.prism.light, "github");
        assert_eq!(config.theme.prism.dark, "dracula");
        assert_eq!(config.theme.zoom.selector, ".markdown :not(em) > img");
        assert!(config.theme.announcement.is_none());
    }

    #[test]
    fn test_announcement_defaults() {
        let config = r#"
            [base]
            title = "Test"
            url = "https://example.com"

            [theme.announcement]
            id = "announcement"
            content = "<b>Hello</b>"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        let bar = config.theme.announcement.unwrap();
        assert_eq!(bar.background_color, "#fff");
        assert_eq!(bar.text_color, "#000");
        assert!(bar.closeable);
    }
}
