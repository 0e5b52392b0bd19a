//! `[[metadata]]` entries: SEO and social `<meta>` tags.

use serde::{Deserialize, Deserializer, Serialize, de};

/// A single `<meta>` tag, keyed by either `property` (Open Graph) or `name`.
///
/// Records are emitted in declaration order, and duplicate keys are allowed
/// (e.g. several `og:image:*` dimension tags).
///
/// # Example
/// ```toml
/// [[metadata]]
/// name = "keywords"
/// content = "DevSecOps, Cloud Security"
///
/// [[metadata]]
/// property = "og:type"
/// content = "website"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum MetadataRecord {
    Property { property: String, content: String },
    Name { name: String, content: String },
}

/// A record as written, before its key attribute is checked.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawRecord {
    property: Option<String>,
    name: Option<String>,
    content: String,
}

impl<'de> Deserialize<'de> for MetadataRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let RawRecord {
            property,
            name,
            content,
        } = RawRecord::deserialize(deserializer)?;

        match (property, name) {
            (Some(property), None) => Ok(Self::Property { property, content }),
            (None, Some(name)) => Ok(Self::Name { name, content }),
            (Some(_), Some(_)) => Err(de::Error::custom(
                "metadata record sets both `property` and `name`",
            )),
            (None, None) => Err(de::Error::custom(
                "metadata record needs `property` or `name`",
            )),
        }
    }
}

impl MetadataRecord {
    /// Attribute used for the key (`property` or `name`).
    pub const fn attr(&self) -> &'static str {
        match self {
            Self::Property { .. } => "property",
            Self::Name { .. } => "name",
        }
    }

    pub fn key(&self) -> &str {
        match self {
            Self::Property { property, .. } => property,
            Self::Name { name, .. } => name,
        }
    }

    pub fn content(&self) -> &str {
        match self {
            Self::Property { content, .. } | Self::Name { content, .. } => content,
        }
    }

    /// Open Graph / Twitter tags, dropped when a target disables social metadata.
    pub fn is_social(&self) -> bool {
        let key = self.key();
        key.starts_with("og:") || key.starts_with("twitter:")
    }
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;
    use super::*;

    #[test]
    fn test_metadata_records_keep_order_and_duplicates() {
        let config = r#"
            [base]
            title = "Test"
            url = "https://example.com"

            [[metadata]]
            name = "keywords"
            content = "docs"

            [[metadata]]
            property = "og:image:width"
            content = "1200"

            [[metadata]]
            property = "og:image:width"
            content = "600"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        let keys: Vec<_> = config.metadata.iter().map(|m| (m.attr(), m.key())).collect();
        assert_eq!(
            keys,
            [
                ("name", "keywords"),
                ("property", "og:image:width"),
                ("property", "og:image:width"),
            ]
        );
        assert_eq!(config.metadata[2].content(), "600");
    }

    #[test]
    fn test_metadata_without_key_rejected() {
        let config = r#"
            [base]
            title = "Test"
            url = "https://example.com"

            [[metadata]]
            content = "orphan"
        "#;
        let result: Result<SiteConfig, _> = toml::from_str(config);
        assert!(result.is_err());
    }

    #[test]
    fn test_metadata_with_both_keys_rejected() {
        let config = r#"
            [base]
            title = "Test"
            url = "https://example.com"

            [[metadata]]
            property = "og:title"
            name = "title"
            content = "ambiguous"
        "#;
        let err = toml::from_str::<SiteConfig>(config).unwrap_err();
        assert!(err.to_string().contains("both `property` and `name`"));
    }

    #[test]
    fn test_metadata_unknown_field_rejected() {
        let config = r#"
            [base]
            title = "Test"
            url = "https://example.com"

            [[metadata]]
            name = "keywords"
            content = "docs"
            lang = "en"
        "#;
        assert!(toml::from_str::<SiteConfig>(config).is_err());
    }

    #[test]
    fn test_metadata_serializes_flat() {
        let record = MetadataRecord::Property {
            property: "og:type".into(),
            content: "website".into(),
        };
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            serde_json::json!({ "property": "og:type", "content": "website" })
        );
    }

    #[test]
    fn test_is_social() {
        let og = MetadataRecord::Property {
            property: "og:title".into(),
            content: "T".into(),
        };
        let twitter = MetadataRecord::Name {
            name: "twitter:card".into(),
            content: "summary".into(),
        };
        let keywords = MetadataRecord::Name {
            name: "keywords".into(),
            content: "a, b".into(),
        };

        assert!(og.is_social());
        assert!(twitter.is_social());
        assert!(!keywords.is_social());
    }
}
