//! `[footer]` section configuration.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[footer]` section in portal.toml.
///
/// # Example
/// ```toml
/// [footer]
/// style = "dark"
///
/// [[footer.links]]
/// title = "Socials"
/// items = [
///     { label = "Discord", href = "https://discord.gg/enMmUNq8jc" },
///     { label = "LinkedIn", href = "https://www.linkedin.com/company/devsecblueprint/" },
/// ]
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct FooterConfig {
    /// Footer color scheme ("dark" or "light").
    #[serde(default = "defaults::footer::style")]
    #[educe(Default = defaults::footer::style())]
    pub style: String,

    /// Link columns, rendered left to right.
    #[serde(default)]
    pub links: Vec<FooterGroup>,
}

/// One titled column of footer links. Must not be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FooterGroup {
    pub title: String,

    #[serde(default)]
    pub items: Vec<FooterLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FooterLink {
    #[serde(default)]
    pub label: String,

    #[serde(default)]
    pub href: String,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;

    #[test]
    fn test_footer_groups() {
        let config = r#"
            [base]
            title = "Test"
            url = "https://example.com"

            [footer]
            style = "light"

            [[footer.links]]
            title = "Socials"
            items = [
                { label = "Discord", href = "https://discord.gg/x" },
                { label = "LinkedIn", href = "https://linkedin.com/company/x" },
            ]

            [[footer.links]]
            title = "Community"
            items = [{ label = "License", href = "https://github.com/x/y/blob/main/LICENSE" }]
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.footer.style, "light");
        assert_eq!(config.footer.links.len(), 2);
        assert_eq!(config.footer.links[0].items[1].label, "LinkedIn");
        assert_eq!(config.footer.links[1].title, "Community");
    }

    #[test]
    fn test_footer_group_without_items_parses() {
        let config = r#"
            [base]
            title = "Test"
            url = "https://example.com"

            [[footer.links]]
            title = "Empty"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.footer.style, "dark");
        assert!(config.footer.links[0].items.is_empty());
    }
}
