//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// Common Defaults
// ============================================================================

pub fn r#true() -> bool {
    true
}

pub fn r#false() -> bool {
    false
}

// ============================================================================
// [base] Section Defaults
// ============================================================================

pub mod base {
    pub fn base_path() -> String {
        "/".into()
    }

    pub fn favicon() -> Option<String> {
        None
    }

    pub fn social_card() -> Option<String> {
        None
    }

    pub fn copyright() -> String {
        "Copyright © {year}".into()
    }
}

// ============================================================================
// [i18n] Section Defaults
// ============================================================================

pub mod i18n {
    pub fn default_locale() -> String {
        "en".into()
    }

    pub fn locales() -> Vec<String> {
        vec![default_locale()]
    }
}

// ============================================================================
// [build] Section Defaults
// ============================================================================

pub mod build {
    use super::super::BrokenLinkPolicy;

    pub fn on_broken_links() -> BrokenLinkPolicy {
        BrokenLinkPolicy::Throw
    }

    pub fn on_broken_markdown_links() -> BrokenLinkPolicy {
        BrokenLinkPolicy::Warn
    }

    pub mod docs {
        pub fn path() -> String {
            "docs".into()
        }

        pub fn route_base_path() -> String {
            "/".into()
        }

        pub fn sidebar_path() -> String {
            "./sidebars.ts".into()
        }
    }
}

// ============================================================================
// [footer] Section Defaults
// ============================================================================

pub mod footer {
    pub fn style() -> String {
        "dark".into()
    }
}

// ============================================================================
// [theme] Section Defaults
// ============================================================================

pub mod theme {
    pub fn custom_css() -> String {
        "./src/css/custom.css".into()
    }

    pub mod prism {
        pub fn light() -> String {
            "github".into()
        }

        pub fn dark() -> String {
            "dracula".into()
        }
    }

    pub mod zoom {
        pub fn selector() -> String {
            ".markdown :not(em) > img".into()
        }

        pub fn background_light() -> String {
            "rgb(255, 255, 255)".into()
        }

        pub fn background_dark() -> String {
            "rgb(50, 50, 50)".into()
        }
    }

    pub mod announcement {
        pub fn background_color() -> String {
            "#fff".into()
        }

        pub fn text_color() -> String {
            "#000".into()
        }
    }
}

// ============================================================================
// [sitemap] Section Defaults
// ============================================================================

pub mod sitemap {
    use super::super::{ChangeFreq, LastmodStrategy};

    pub fn filename() -> String {
        "sitemap.xml".into()
    }

    pub fn changefreq() -> ChangeFreq {
        ChangeFreq::Weekly
    }

    pub fn priority() -> f32 {
        0.5
    }

    pub fn lastmod() -> LastmodStrategy {
        LastmodStrategy::Date
    }

    pub fn ignore_patterns() -> Vec<String> {
        vec!["/page/".into()]
    }
}

// ============================================================================
// [env] Section Defaults
// ============================================================================

pub mod env {
    pub fn analytics_id() -> String {
        "GOOGLE_ANALYTICS_ID".into()
    }

    pub fn tag_manager_id() -> String {
        "GOOGLE_TAG_MANAGER_ID".into()
    }

    pub fn canonical_url() -> String {
        "SITE_URL".into()
    }
}
