//! `[build]` section configuration.
//!
//! Settings consumed by the static-site pipeline: docs source, plugins and
//! broken-link policies.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// What the pipeline does when it finds a broken link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrokenLinkPolicy {
    Ignore,
    Log,
    Warn,
    #[default]
    Throw,
}

/// `[build]` section in portal.toml.
///
/// # Example
/// ```toml
/// [build]
/// plugins = ["docusaurus-plugin-image-zoom", "docusaurus-lunr-search"]
/// on_broken_links = "throw"
///
/// [build.docs]
/// path = "docs"
/// route_base_path = "/"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BuildConfig {
    /// Plugin identifiers, in load order.
    #[serde(default)]
    pub plugins: Vec<String>,

    #[serde(default = "defaults::build::on_broken_links")]
    #[educe(Default = defaults::build::on_broken_links())]
    pub on_broken_links: BrokenLinkPolicy,

    #[serde(default = "defaults::build::on_broken_markdown_links")]
    #[educe(Default = defaults::build::on_broken_markdown_links())]
    pub on_broken_markdown_links: BrokenLinkPolicy,

    #[serde(default)]
    pub docs: DocsConfig,

    /// Blog plugin switch.
    #[serde(default = "defaults::r#false")]
    #[educe(Default = false)]
    pub blog: bool,
}

/// `[build.docs]`
#[derive(Debug, Clone, PartialEq, Eq, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct DocsConfig {
    /// Docs source directory.
    #[serde(default = "defaults::build::docs::path")]
    #[educe(Default = defaults::build::docs::path())]
    pub path: String,

    /// URL prefix the docs are mounted under.
    #[serde(default = "defaults::build::docs::route_base_path")]
    #[educe(Default = defaults::build::docs::route_base_path())]
    pub route_base_path: String,

    #[serde(default = "defaults::build::docs::sidebar_path")]
    #[educe(Default = defaults::build::docs::sidebar_path())]
    pub sidebar_path: String,
}
