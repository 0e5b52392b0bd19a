//! `[base]` section configuration.
//!
//! Contains the site identity: title, tagline, canonical URL, base path, etc.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[base]` section in portal.toml - site identity.
///
/// # Example
/// ```toml
/// [base]
/// title = "DSB"
/// tagline = "DevSec Blueprint"
/// url = "https://devsecblueprint.com"
/// base_path = "/"
/// copyright = "Copyright © {year} DevSec Blueprint LLC"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BaseConfig {
    /// Site title used in the browser tab and navbar.
    pub title: String,

    /// Short description, emitted as `<meta name="description">`.
    #[serde(default)]
    pub tagline: String,

    /// Production URL of the site (scheme + host, no trailing path).
    pub url: String,

    /// Path under which the site is served. Must start and end with `/`.
    #[serde(default = "defaults::base::base_path")]
    #[educe(Default = defaults::base::base_path())]
    pub base_path: String,

    /// Favicon path relative to the static directory.
    #[serde(default = "defaults::base::favicon")]
    #[educe(Default = defaults::base::favicon())]
    pub favicon: Option<String>,

    /// Hosting organization (GitHub org/user name).
    #[serde(default)]
    pub organization: String,

    /// Hosting project (repository name).
    #[serde(default)]
    pub project: String,

    /// Social card image, relative to the site or absolute.
    #[serde(default = "defaults::base::social_card")]
    #[educe(Default = defaults::base::social_card())]
    pub social_card: Option<String>,

    /// Footer copyright template. `{year}` is replaced at resolution time.
    #[serde(default = "defaults::base::copyright")]
    #[educe(Default = defaults::base::copyright())]
    pub copyright: String,
}
