//! Invariant checks for manifest resolution.
//!
//! Checks never stop at the first problem: every [`Violation`] is pushed into
//! a [`Validator`], and [`Validator::finish`] fails once with the whole list.

use super::{LocaleSet, NavItem, SiteIdentity};
use crate::config::{FooterGroup, MetadataRecord, NavItemConfig, SitemapConfig};
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// Language tag: primary language, optional script, optional region.
/// Matches `en`, `zh-Hans`, `zh-CN`, `pt-BR`, `es-419`.
static LOCALE_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z]{2,3}(-[A-Za-z]{4})?(-([A-Za-z]{2}|[0-9]{3}))?$").unwrap()
});

// ============================================================================
// Violations
// ============================================================================

/// A single broken invariant in the descriptor.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Violation {
    #[error("[i18n] default locale `{0}` is not in the locale list")]
    DefaultLocaleMissing(String),

    #[error("[i18n] locale `{0}` is listed more than once")]
    DuplicateLocale(String),

    #[error("[i18n] locale list is empty")]
    NoLocales,

    #[error("[i18n] `{0}` is not a valid locale identifier")]
    MalformedLocale(String),

    #[error("[navbar.items] item #{index} ({kind}) has no position")]
    NavPositionMissing { index: usize, kind: &'static str },

    #[error("[navbar.items] item #{index} ({kind}) is missing `{field}`")]
    NavFieldMissing {
        index: usize,
        kind: &'static str,
        field: &'static str,
    },

    #[error("[footer.links] group `{0}` has no items")]
    EmptyFooterGroup(String),

    #[error("[footer.links] link #{index} in group `{group}` is missing `{field}`")]
    FooterLinkFieldMissing {
        group: String,
        index: usize,
        field: &'static str,
    },

    #[error("[metadata] record #{index} (`{key}`) has empty content")]
    EmptyMetadata { index: usize, key: String },

    #[error("[base.url] `{0}` must start with http:// or https://")]
    InvalidUrl(String),

    #[error("[base.base_path] `{0}` must start and end with `/`")]
    InvalidBasePath(String),

    #[error("[sitemap.priority] {0} is outside 0.0..=1.0")]
    PriorityOutOfRange(f32),

    #[error("unknown deployment target `{0}`")]
    UnknownTarget(String),
}

/// Resolution failed; carries every violation found in one pass.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("manifest validation failed with {} violation(s):{}", .violations.len(), list(.violations))]
pub struct ValidationError {
    pub violations: Vec<Violation>,
}

fn list(violations: &[Violation]) -> String {
    violations.iter().map(|v| format!("\n  - {v}")).collect()
}

// ============================================================================
// Validator
// ============================================================================

#[derive(Debug, Default)]
pub(super) struct Validator {
    violations: Vec<Violation>,
}

impl Validator {
    pub fn push(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    pub fn finish(self) -> Result<(), ValidationError> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationError {
                violations: self.violations,
            })
        }
    }

    pub fn check_site(&mut self, site: &SiteIdentity) {
        if !(site.url.starts_with("http://") || site.url.starts_with("https://")) {
            self.push(Violation::InvalidUrl(site.url.clone()));
        }
        if !(site.base_path.starts_with('/') && site.base_path.ends_with('/')) {
            self.push(Violation::InvalidBasePath(site.base_path.clone()));
        }
    }

    pub fn check_locales(&mut self, set: &LocaleSet) {
        if set.locales.is_empty() {
            self.push(Violation::NoLocales);
        }

        let mut seen = Vec::with_capacity(set.locales.len());
        for locale in &set.locales {
            if !LOCALE_TAG.is_match(locale) {
                self.push(Violation::MalformedLocale(locale.clone()));
            }
            if seen.contains(&locale) {
                // Report each duplicate once, however many copies there are.
                if !self
                    .violations
                    .contains(&Violation::DuplicateLocale(locale.clone()))
                {
                    self.push(Violation::DuplicateLocale(locale.clone()));
                }
            } else {
                seen.push(locale);
            }
        }

        if !set.locales.contains(&set.default) {
            self.push(Violation::DefaultLocaleMissing(set.default.clone()));
        }
    }

    /// Convert configured items, reporting every missing field.
    ///
    /// Broken items are dropped from the result; since any violation fails
    /// resolution, the partial list is never observed.
    pub fn nav_items(&mut self, items: &[NavItemConfig]) -> Vec<NavItem> {
        items
            .iter()
            .enumerate()
            .filter_map(|(index, item)| self.nav_item(index, item))
            .collect()
    }

    fn nav_item(&mut self, index: usize, item: &NavItemConfig) -> Option<NavItem> {
        let kind = item.kind();
        let before = self.violations.len();

        let require = |this: &mut Self, value: &str, field: &'static str| {
            if value.trim().is_empty() {
                this.push(Violation::NavFieldMissing { index, kind, field });
            }
        };

        match item {
            NavItemConfig::DocSidebar {
                sidebar_id, label, ..
            } => {
                require(self, sidebar_id, "sidebar_id");
                require(self, label, "label");
            }
            NavItemConfig::Link { href, label, .. } => {
                require(self, href, "href");
                require(self, label, "label");
            }
            NavItemConfig::Repository { href, .. } => require(self, href, "href"),
            NavItemConfig::LocaleDropdown { .. } => {}
        }

        let Some(position) = item.position() else {
            self.push(Violation::NavPositionMissing { index, kind });
            return None;
        };

        (self.violations.len() == before).then(|| NavItem::from_config(item, position))
    }

    pub fn check_footer(&mut self, groups: &[FooterGroup]) {
        for group in groups {
            if group.items.is_empty() {
                self.push(Violation::EmptyFooterGroup(group.title.clone()));
                continue;
            }
            for (index, link) in group.items.iter().enumerate() {
                for (value, field) in [(&link.label, "label"), (&link.href, "href")] {
                    if value.trim().is_empty() {
                        self.push(Violation::FooterLinkFieldMissing {
                            group: group.title.clone(),
                            index,
                            field,
                        });
                    }
                }
            }
        }
    }

    pub fn check_metadata(&mut self, records: &[MetadataRecord]) {
        for (index, record) in records.iter().enumerate() {
            if record.content().trim().is_empty() {
                self.push(Violation::EmptyMetadata {
                    index,
                    key: record.key().to_owned(),
                });
            }
        }
    }

    pub fn check_sitemap(&mut self, sitemap: &SitemapConfig) {
        if !(0.0..=1.0).contains(&sitemap.priority) {
            self.push(Violation::PriorityOutOfRange(sitemap.priority));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{NavPosition, SiteConfig};

    fn locales(default: &str, list: &[&str]) -> LocaleSet {
        LocaleSet {
            default: default.into(),
            locales: list.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn violations(f: impl FnOnce(&mut Validator)) -> Vec<Violation> {
        let mut validator = Validator::default();
        f(&mut validator);
        match validator.finish() {
            Ok(()) => Vec::new(),
            Err(err) => err.violations,
        }
    }

    #[test]
    fn test_locale_tag_pattern() {
        for ok in ["en", "es", "zh-CN", "zh-TW", "pt-BR", "zh-Hans", "es-419", "fil"] {
            assert!(LOCALE_TAG.is_match(ok), "{ok} should be accepted");
        }
        for bad in ["", "e", "english", "en_US", "en-", "zh-Hans-", "12"] {
            assert!(!LOCALE_TAG.is_match(bad), "{bad} should be rejected");
        }
    }

    #[test]
    fn test_valid_locales() {
        let found = violations(|v| v.check_locales(&locales("es", &["en", "es"])));
        assert!(found.is_empty());
    }

    #[test]
    fn test_default_locale_missing() {
        let found = violations(|v| v.check_locales(&locales("fr", &["en", "es"])));
        assert_eq!(found, vec![Violation::DefaultLocaleMissing("fr".into())]);
        assert!(found[0].to_string().contains("`fr`"));
    }

    #[test]
    fn test_duplicate_locale_reported_once() {
        let found = violations(|v| v.check_locales(&locales("en", &["en", "es", "en", "en"])));
        assert_eq!(found, vec![Violation::DuplicateLocale("en".into())]);
    }

    #[test]
    fn test_empty_locale_list() {
        let found = violations(|v| v.check_locales(&locales("en", &[])));
        assert_eq!(
            found,
            vec![
                Violation::NoLocales,
                Violation::DefaultLocaleMissing("en".into())
            ]
        );
    }

    #[test]
    fn test_nav_items_collect_every_missing_field() {
        let items = vec![
            NavItemConfig::Link {
                href: String::new(),
                label: String::new(),
                position: None,
                class_name: None,
            },
            NavItemConfig::LocaleDropdown {
                position: Some(NavPosition::Right),
            },
            NavItemConfig::DocSidebar {
                sidebar_id: "main".into(),
                label: "Docs".into(),
                position: Some(NavPosition::Left),
            },
        ];

        let mut validator = Validator::default();
        let resolved = validator.nav_items(&items);
        let found = validator.finish().unwrap_err().violations;

        assert_eq!(resolved.len(), 2);
        assert_eq!(
            found,
            vec![
                Violation::NavFieldMissing {
                    index: 0,
                    kind: "link",
                    field: "href"
                },
                Violation::NavFieldMissing {
                    index: 0,
                    kind: "link",
                    field: "label"
                },
                Violation::NavPositionMissing {
                    index: 0,
                    kind: "link"
                },
            ]
        );
    }

    #[test]
    fn test_footer_empty_group_and_missing_fields() {
        let config = SiteConfig::from_str(
            r#"
            [base]
            title = "Test"
            url = "https://example.com"

            [[footer.links]]
            title = "Socials"

            [[footer.links]]
            title = "Help"
            items = [{ label = "Issues", href = " " }]
            "#,
        )
        .unwrap();
        let found = violations(|v| v.check_footer(&config.footer.links));

        assert_eq!(
            found,
            vec![
                Violation::EmptyFooterGroup("Socials".into()),
                Violation::FooterLinkFieldMissing {
                    group: "Help".into(),
                    index: 0,
                    field: "href"
                },
            ]
        );
    }

    #[test]
    fn test_site_url_and_base_path() {
        let site = SiteIdentity {
            url: "devsecblueprint.com".into(),
            base_path: "docs".into(),
            ..SiteIdentity::default()
        };
        let found = violations(|v| v.check_site(&site));

        assert_eq!(
            found,
            vec![
                Violation::InvalidUrl("devsecblueprint.com".into()),
                Violation::InvalidBasePath("docs".into()),
            ]
        );
    }

    #[test]
    fn test_priority_range() {
        let mut sitemap = SitemapConfig::default();
        assert!(violations(|v| v.check_sitemap(&sitemap)).is_empty());

        sitemap.priority = 1.5;
        assert_eq!(
            violations(|v| v.check_sitemap(&sitemap)),
            vec![Violation::PriorityOutOfRange(1.5)]
        );
    }

    #[test]
    fn test_validation_error_lists_everything() {
        let err = ValidationError {
            violations: vec![
                Violation::DefaultLocaleMissing("fr".into()),
                Violation::EmptyFooterGroup("Socials".into()),
            ],
        };
        let display = err.to_string();

        assert!(display.starts_with("manifest validation failed with 2 violation(s):"));
        assert!(display.contains("\n  - [i18n] default locale `fr`"));
        assert!(display.contains("\n  - [footer.links] group `Socials` has no items"));
    }
}
