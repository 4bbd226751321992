// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the configuration crate.
//!
//! This module defines the error types that can occur when loading, resolving,
//! or validating configuration. All errors use `thiserror` for proper error
//! handling and conversion.

use thiserror::Error;

/// The main error type for configuration operations.
///
/// This enum is marked as `#[non_exhaustive]` to allow for future additions
/// without breaking backwards compatibility.
///
/// # Examples
///
/// ```
/// use provcfg::domain::errors::ConfigError;
///
/// let error = ConfigError::invalid("facts.blacklist", "setting is invalid");
/// assert_eq!(error.to_string(), "entry facts.blacklist: setting is invalid");
/// assert_eq!(error.key(), Some("facts.blacklist"));
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// A configuration entry holds a value that failed validation.
    #[error("entry {key}: {message}")]
    InvalidConfiguration {
        /// The dotted key of the offending entry
        key: String,
        /// Why the entry is invalid
        message: String,
    },

    /// The requested configuration key was not present in the resolved tree.
    #[error("Configuration key not found: {key}")]
    ConfigKeyNotFound {
        /// The key that was not found
        key: String,
    },

    /// A plugin category name that has no search path convention.
    #[error("Unknown plugin category: {name}")]
    UnknownCategory {
        /// The name that was not recognized
        name: String,
    },

    /// An error occurred in a document source.
    #[error("Configuration source '{source_name}' error: {message}")]
    SourceError {
        /// The name of the source that encountered the error
        source_name: String,
        /// The error message
        message: String,
        /// The underlying error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Failed to parse a configuration document.
    #[error("Failed to parse configuration: {message}")]
    ParseError {
        /// The error message
        message: String,
        /// The underlying parsing error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An I/O error occurred while reading configuration.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ConfigError {
    /// Creates an `InvalidConfiguration` error for the given key.
    pub fn invalid(key: impl Into<String>, message: impl Into<String>) -> Self {
        ConfigError::InvalidConfiguration {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Returns the configuration key this error refers to, if any.
    pub fn key(&self) -> Option<&str> {
        match self {
            ConfigError::InvalidConfiguration { key, .. }
            | ConfigError::ConfigKeyNotFound { key } => Some(key),
            _ => None,
        }
    }
}

/// A specialized Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_configuration_error() {
        let error = ConfigError::invalid("facts.blacklist", "entry ( is bad");
        assert_eq!(
            error.to_string(),
            "entry facts.blacklist: entry ( is bad"
        );
        assert_eq!(error.key(), Some("facts.blacklist"));
    }

    #[test]
    fn test_config_key_not_found_error() {
        let error = ConfigError::ConfigKeyNotFound {
            key: "test.key".to_string(),
        };
        assert_eq!(error.to_string(), "Configuration key not found: test.key");
        assert_eq!(error.key(), Some("test.key"));
    }

    #[test]
    fn test_unknown_category_error() {
        let error = ConfigError::UnknownCategory {
            name: "hook".to_string(),
        };
        assert_eq!(error.to_string(), "Unknown plugin category: hook");
        assert_eq!(error.key(), None);
    }

    #[test]
    fn test_source_error() {
        let error = ConfigError::SourceError {
            source_name: "yaml-file".to_string(),
            message: "Failed to read configuration file".to_string(),
            source: None,
        };
        assert_eq!(
            error.to_string(),
            "Configuration source 'yaml-file' error: Failed to read configuration file"
        );
    }

    #[test]
    fn test_parse_error() {
        let error = ConfigError::ParseError {
            message: "Invalid YAML".to_string(),
            source: None,
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration: Invalid YAML"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = ConfigError::from(io_error);
        assert!(matches!(error, ConfigError::IoError(_)));
    }
}
