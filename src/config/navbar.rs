//! `[navbar]` section configuration.
//!
//! Navigation items are a tagged union keyed by `type`:
//!
//! | `type`            | Required fields           |
//! |-------------------|---------------------------|
//! | `doc-sidebar`     | `sidebar_id`, `label`     |
//! | `link`            | `href`, `label`           |
//! | `locale-dropdown` | (none)                    |
//! | `repository`      | `href`                    |
//!
//! Every item needs a `position` (`left` or `right`). Missing fields are kept
//! as empty/`None` here and reported by manifest validation, so one run lists
//! every broken item.

use serde::{Deserialize, Serialize};

/// Horizontal placement of a navbar item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavPosition {
    Left,
    Right,
}

/// `[navbar]` section in portal.toml.
///
/// # Example
/// ```toml
/// [navbar.logo]
/// src = "img/logo.svg"
/// alt = "DSB Logo"
///
/// [[navbar.items]]
/// type = "doc-sidebar"
/// sidebar_id = "tutorialSidebar"
/// label = "The DevSec Blueprint"
/// position = "left"
///
/// [[navbar.items]]
/// type = "locale-dropdown"
/// position = "right"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavbarConfig {
    #[serde(default)]
    pub logo: Option<LogoConfig>,

    #[serde(default)]
    pub items: Vec<NavItemConfig>,
}

/// `[navbar.logo]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LogoConfig {
    pub src: String,

    #[serde(default)]
    pub alt: String,

    #[serde(default)]
    pub class_name: Option<String>,
}

/// A single `[[navbar.items]]` entry as written by the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum NavItemConfig {
    /// Reference to a docs sidebar.
    DocSidebar {
        #[serde(default)]
        sidebar_id: String,
        #[serde(default)]
        label: String,
        #[serde(default)]
        position: Option<NavPosition>,
    },
    /// External link with a visible label.
    Link {
        #[serde(default)]
        href: String,
        #[serde(default)]
        label: String,
        #[serde(default)]
        position: Option<NavPosition>,
        #[serde(default)]
        class_name: Option<String>,
    },
    /// Locale selector control.
    LocaleDropdown {
        #[serde(default)]
        position: Option<NavPosition>,
    },
    /// Icon link to the source repository.
    Repository {
        #[serde(default)]
        href: String,
        #[serde(default)]
        position: Option<NavPosition>,
        #[serde(default)]
        class_name: Option<String>,
        #[serde(default)]
        aria_label: Option<String>,
    },
}

impl NavItemConfig {
    /// Short name used in violation reports.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::DocSidebar { .. } => "doc-sidebar",
            Self::Link { .. } => "link",
            Self::LocaleDropdown { .. } => "locale-dropdown",
            Self::Repository { .. } => "repository",
        }
    }

    pub const fn position(&self) -> Option<NavPosition> {
        match self {
            Self::DocSidebar { position, .. }
            | Self::Link { position, .. }
            | Self::LocaleDropdown { position }
            | Self::Repository { position, .. } => *position,
        }
    }
}
