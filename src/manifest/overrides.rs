//! Environment snapshot and the override set derived from it.
//!
//! The resolver never touches `std::env`. The binary takes one snapshot at
//! startup ([`Environment::from_process`]), optionally layers a `.env` file
//! underneath it, and passes the value in.

use crate::config::EnvConfig;
use std::{collections::BTreeMap, path::Path};

// ============================================================================
// Environment
// ============================================================================

/// Immutable key/value view of environment variables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    vars: BTreeMap<String, String>,
}

impl Environment {
    /// Snapshot the process environment. Non-UTF-8 entries are skipped.
    pub fn from_process() -> Self {
        std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect()
    }

    /// Layer a `.env` file underneath the current values.
    ///
    /// Variables already present win, matching the usual dotenv semantics.
    /// The process environment itself is left untouched.
    pub fn with_dotenv(mut self, path: &Path) -> Result<Self, dotenvy::Error> {
        for item in dotenvy::from_path_iter(path)? {
            let (key, value) = item?;
            self.vars.entry(key).or_insert(value);
        }
        Ok(self)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }
}

/// Fixture builders.
#[cfg(test)]
impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Environment {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

// ============================================================================
// Override Set
// ============================================================================

/// Values pulled from the environment for each named override.
///
/// `None` means the feature is disabled. An empty or whitespace-only variable
/// counts as unset, so a blank value never reaches the manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvOverrides {
    pub analytics_id: Option<String>,
    pub tag_manager_id: Option<String>,
    pub canonical_url: Option<String>,
}

impl EnvOverrides {
    pub fn collect(names: &EnvConfig, env: &Environment) -> Self {
        Self {
            analytics_id: lookup(env, &names.analytics_id),
            tag_manager_id: lookup(env, &names.tag_manager_id),
            canonical_url: lookup(env, &names.canonical_url),
        }
    }
}

fn lookup(env: &Environment, name: &str) -> Option<String> {
    env.get(name)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_owned)
}
