//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading `portal.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config file parsing error")]
    Toml(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_config_error_display() {
        let io_err = ConfigError::Io(
            PathBuf::from("portal.toml"),
            Error::new(ErrorKind::NotFound, "file not found"),
        );
        let display = format!("{io_err}");
        assert!(display.contains("IO error"));
        assert!(display.contains("portal.toml"));
    }

    #[test]
    fn test_toml_error_keeps_source() {
        let toml_err = toml::from_str::<toml::Value>("[base").unwrap_err();
        let err = ConfigError::from(toml_err);

        assert_eq!(format!("{err}"), "Config file parsing error");
        assert!(std::error::Error::source(&err).is_some());
    }
}
