//! `[i18n]` section configuration.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[i18n]` section in portal.toml - declared locales.
///
/// Locale strings are declared here, not translated.
///
/// # Example
/// ```toml
/// [i18n]
/// default_locale = "en"
/// locales = ["en", "es", "zh-CN", "pt-BR"]
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct I18nConfig {
    /// Locale used for unprefixed routes. Must be one of `locales`.
    #[serde(default = "defaults::i18n::default_locale")]
    #[educe(Default = defaults::i18n::default_locale())]
    pub default_locale: String,

    /// Ordered locale identifiers; order drives the locale dropdown.
    #[serde(default = "defaults::i18n::locales")]
    #[educe(Default = defaults::i18n::locales())]
    pub locales: Vec<String>,
}
