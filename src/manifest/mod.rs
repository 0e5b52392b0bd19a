//! Manifest resolution.
//!
//! Merges the parsed descriptor (`portal.toml`) with an optional deployment
//! target overlay and the environment override set into one immutable
//! [`ResolvedManifest`].
//!
//! # Precedence
//!
//! ```text
//! descriptor  <  [targets.<name>] overlay  <  environment override
//! ```
//!
//! # Purity
//!
//! [`resolve`] reads only its arguments. The environment is an injected
//! [`Environment`] snapshot and the build instant comes from
//! [`ResolveOptions::now`], so identical inputs always yield identical
//! manifests. Nothing is logged or written.

mod overrides;
mod validate;

pub use overrides::{EnvOverrides, Environment};
pub use validate::{ValidationError, Violation};

use crate::config::{
    BrokenLinkPolicy, DocsConfig, FooterGroup, LogoConfig, MetadataRecord, NavItemConfig,
    NavPosition, SiteConfig, SitemapConfig, TargetConfig, ThemeConfig,
};
use chrono::{DateTime, Datelike, Utc};
use serde::Serialize;
use validate::Validator;

/// Placeholder replaced with the build year in the footer copyright.
const YEAR_PLACEHOLDER: &str = "{year}";

// ============================================================================
// Resolved Types
// ============================================================================

/// The single, validated description of one site build.
///
/// Serializes to the JSON handed to the rendering pipeline. Optional features
/// (`target`, `gtag`, `tag_manager`) are omitted from the output when absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedManifest {
    /// Active deployment target, if one was selected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,

    pub site: SiteIdentity,
    pub i18n: LocaleSet,
    pub navbar: Navbar,
    pub metadata: Vec<MetadataRecord>,
    pub footer: Footer,
    pub theme: ThemeConfig,
    pub plugins: Vec<String>,
    pub docs: DocsConfig,
    pub blog: bool,
    pub on_broken_links: BrokenLinkPolicy,
    pub on_broken_markdown_links: BrokenLinkPolicy,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub gtag: Option<Gtag>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_manager: Option<TagManager>,

    pub sitemap: SitemapConfig,
}

/// Who the site is and where it lives.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SiteIdentity {
    pub title: String,
    pub tagline: String,
    /// Canonical origin, without trailing slash.
    pub url: String,
    pub base_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favicon: Option<String>,
    pub organization: String,
    pub project: String,
    /// Absolute URL of the social card image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social_card: Option<String>,
}

impl SiteIdentity {
    /// Absolute URL for a path on this site.
    ///
    /// Root-relative paths (`/docs/intro`) already carry the base path and are
    /// joined onto the origin. Bare paths (`img/a.png`) are resolved under the
    /// base path. Absolute inputs (`http://`, `https://`) are returned unchanged.
    pub fn absolute_url(&self, path: &str) -> String {
        if is_absolute(path) {
            path.to_owned()
        } else if path.starts_with('/') {
            format!("{}{path}", self.url)
        } else {
            format!("{}{}{path}", self.url, self.base_path)
        }
    }

    /// Href for a static asset served from under the base path.
    pub fn asset_href(&self, path: &str) -> String {
        if is_absolute(path) {
            return path.to_owned();
        }
        format!("{}{}", self.base_path, path.trim_start_matches('/'))
    }
}

fn is_absolute(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

/// Declared locales with the designated default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocaleSet {
    pub default: String,
    pub locales: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Navbar {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<LogoConfig>,
    pub items: Vec<NavItem>,
}

/// A validated navigation item: position resolved, required fields present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum NavItem {
    DocSidebar {
        sidebar_id: String,
        label: String,
        position: NavPosition,
    },
    Link {
        href: String,
        label: String,
        position: NavPosition,
        #[serde(skip_serializing_if = "Option::is_none")]
        class_name: Option<String>,
    },
    LocaleDropdown {
        position: NavPosition,
    },
    Repository {
        href: String,
        position: NavPosition,
        #[serde(skip_serializing_if = "Option::is_none")]
        class_name: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        aria_label: Option<String>,
    },
}

impl NavItem {
    fn from_config(item: &NavItemConfig, position: NavPosition) -> Self {
        match item.clone() {
            NavItemConfig::DocSidebar {
                sidebar_id, label, ..
            } => Self::DocSidebar {
                sidebar_id,
                label,
                position,
            },
            NavItemConfig::Link {
                href,
                label,
                class_name,
                ..
            } => Self::Link {
                href,
                label,
                position,
                class_name,
            },
            NavItemConfig::LocaleDropdown { .. } => Self::LocaleDropdown { position },
            NavItemConfig::Repository {
                href,
                class_name,
                aria_label,
                ..
            } => Self::Repository {
                href,
                position,
                class_name,
                aria_label,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Footer {
    pub style: String,
    pub links: Vec<FooterGroup>,
    /// Copyright line with the build year filled in.
    pub copyright: String,
}

/// Google Analytics (gtag.js) feature; present only with a tracking id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Gtag {
    pub tracking_id: String,
    pub anonymize_ip: bool,
}

/// Google Tag Manager feature; present only with a container id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagManager {
    pub container_id: String,
}

// ============================================================================
// Resolution
// ============================================================================

/// Inputs to [`resolve`] besides the descriptor and the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Build instant; drives the copyright year.
    pub now: DateTime<Utc>,
    /// Deployment target to overlay. `None` uses the descriptor as-is.
    pub target: Option<String>,
}

impl ResolveOptions {
    pub const fn new(now: DateTime<Utc>) -> Self {
        Self { now, target: None }
    }

    pub fn with_target(mut self, name: impl Into<String>) -> Self {
        self.target = Some(name.into());
        self
    }
}

/// Resolve the descriptor into a validated manifest.
///
/// Every invariant violation is collected; on failure the returned
/// [`ValidationError`] lists all of them.
pub fn resolve(
    descriptor: &SiteConfig,
    env: &Environment,
    options: &ResolveOptions,
) -> Result<ResolvedManifest, ValidationError> {
    let mut validator = Validator::default();

    let overlay = match options.target.as_deref() {
        Some(name) => {
            let overlay = descriptor.targets.get(name);
            if overlay.is_none() {
                validator.push(Violation::UnknownTarget(name.to_owned()));
            }
            overlay
        }
        None => None,
    };
    let overrides = EnvOverrides::collect(&descriptor.env, env);

    let site = resolve_site(descriptor, overlay, &overrides);
    validator.check_site(&site);

    let i18n = resolve_locales(descriptor, overlay);
    validator.check_locales(&i18n);

    let items = validator.nav_items(&descriptor.navbar.items);

    validator.check_footer(&descriptor.footer.links);

    let metadata = resolve_metadata(descriptor, overlay);
    validator.check_metadata(&metadata);

    validator.check_sitemap(&descriptor.sitemap);

    validator.finish()?;

    Ok(ResolvedManifest {
        target: overlay.and(options.target.clone()),
        site,
        i18n,
        navbar: Navbar {
            logo: descriptor.navbar.logo.clone(),
            items,
        },
        metadata,
        footer: Footer {
            style: descriptor.footer.style.clone(),
            links: descriptor.footer.links.clone(),
            copyright: descriptor
                .base
                .copyright
                .replace(YEAR_PLACEHOLDER, &options.now.year().to_string()),
        },
        theme: descriptor.theme.clone(),
        plugins: descriptor.build.plugins.clone(),
        docs: descriptor.build.docs.clone(),
        blog: descriptor.build.blog,
        on_broken_links: descriptor.build.on_broken_links,
        on_broken_markdown_links: descriptor.build.on_broken_markdown_links,
        gtag: overrides.analytics_id.map(|tracking_id| Gtag {
            tracking_id,
            anonymize_ip: descriptor.analytics.anonymize_ip,
        }),
        tag_manager: overrides
            .tag_manager_id
            .map(|container_id| TagManager { container_id }),
        sitemap: descriptor.sitemap.clone(),
    })
}

fn resolve_site(
    descriptor: &SiteConfig,
    overlay: Option<&TargetConfig>,
    overrides: &EnvOverrides,
) -> SiteIdentity {
    let base = &descriptor.base;

    let url = overrides
        .canonical_url
        .clone()
        .or_else(|| overlay.and_then(|t| t.url.clone()))
        .unwrap_or_else(|| base.url.clone());

    let mut site = SiteIdentity {
        title: base.title.clone(),
        tagline: base.tagline.clone(),
        url: url.trim_end_matches('/').to_owned(),
        base_path: overlay
            .and_then(|t| t.base_path.clone())
            .unwrap_or_else(|| base.base_path.clone()),
        favicon: base.favicon.clone(),
        organization: overlay
            .and_then(|t| t.organization.clone())
            .unwrap_or_else(|| base.organization.clone()),
        project: overlay
            .and_then(|t| t.project.clone())
            .unwrap_or_else(|| base.project.clone()),
        social_card: None,
    };

    let card = overlay
        .and_then(|t| t.social_card.clone())
        .or_else(|| base.social_card.clone());
    site.social_card = card.map(|card| site.absolute_url(&card));
    site
}

fn resolve_locales(descriptor: &SiteConfig, overlay: Option<&TargetConfig>) -> LocaleSet {
    let i18n = &descriptor.i18n;
    LocaleSet {
        default: overlay
            .and_then(|t| t.default_locale.clone())
            .unwrap_or_else(|| i18n.default_locale.clone()),
        locales: overlay
            .and_then(|t| t.locales.clone())
            .unwrap_or_else(|| i18n.locales.clone()),
    }
}

fn resolve_metadata(descriptor: &SiteConfig, overlay: Option<&TargetConfig>) -> Vec<MetadataRecord> {
    let social = overlay.and_then(|t| t.social_metadata).unwrap_or(true);
    descriptor
        .metadata
        .iter()
        .filter(|record| social || !record.is_social())
        .cloned()
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
