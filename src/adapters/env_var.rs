// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment variable adapter.
//!
//! This module provides an adapter that reads the process-level settings the
//! configuration core needs but does not decide for itself: which file to load,
//! which environment layer is active, and where the application root is.

use std::collections::HashMap;
use std::env;
use std::path::PathBuf;

/// Default prefix for the variables read by [`EnvVarAdapter`].
pub const DEFAULT_PREFIX: &str = "PROVCFG_";

/// Environment name used when none is set.
pub const DEFAULT_ENVIRONMENT: &str = "development";

/// Maximum length for environment variable values (prevents DoS)
const MAX_ENV_VALUE_LEN: usize = 4096;

/// Reads deployment settings from environment variables.
///
/// With the default prefix the adapter reads:
///
/// - `PROVCFG_CONFIG`: path of the configuration file
/// - `PROVCFG_ENV`: name of the active environment layer
/// - `PROVCFG_ROOT`: application root directory
///
/// Empty or oversized values are treated as unset.
///
/// # Examples
///
/// ```rust
/// use provcfg::adapters::EnvVarAdapter;
/// use std::collections::HashMap;
///
/// let mut values = HashMap::new();
/// values.insert("PROVCFG_ENV".to_string(), "production".to_string());
///
/// let adapter = EnvVarAdapter::with_values(values);
/// assert_eq!(adapter.environment(), "production");
/// assert!(adapter.config_path().is_none());
/// ```
#[derive(Debug, Clone)]
pub struct EnvVarAdapter {
    /// Prefix prepended to every variable name
    prefix: String,
    /// Injected values used instead of the process environment
    values: Option<HashMap<String, String>>,
}

impl EnvVarAdapter {
    /// Creates an adapter that reads `PROVCFG_*` variables from the process.
    pub fn new() -> Self {
        Self::with_prefix(DEFAULT_PREFIX)
    }

    /// Creates an adapter that reads variables with a custom prefix.
    ///
    /// ```rust
    /// use provcfg::adapters::EnvVarAdapter;
    ///
    /// let adapter = EnvVarAdapter::with_prefix("RAZOR_");
    /// assert_eq!(adapter.variable_name("ENV"), "RAZOR_ENV");
    /// ```
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            values: None,
        }
    }

    /// Creates an adapter with pre-populated values for testing.
    ///
    /// **Note**: This method is primarily intended for testing. Keys are full
    /// variable names including the default prefix.
    pub fn with_values(values: HashMap<String, String>) -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            values: Some(values),
        }
    }

    /// Returns the full variable name for a setting.
    pub fn variable_name(&self, setting: &str) -> String {
        format!("{}{}", self.prefix, setting)
    }

    /// Returns the configuration file path, if one is set.
    pub fn config_path(&self) -> Option<PathBuf> {
        self.read("CONFIG").map(PathBuf::from)
    }

    /// Returns the active environment name, defaulting to `development`.
    pub fn environment(&self) -> String {
        self.read("ENV")
            .unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string())
    }

    /// Returns the application root, if one is set.
    pub fn app_root(&self) -> Option<PathBuf> {
        self.read("ROOT").map(PathBuf::from)
    }

    fn read(&self, setting: &str) -> Option<String> {
        let name = self.variable_name(setting);
        let value = match &self.values {
            Some(values) => values.get(&name).cloned(),
            None => env::var(&name).ok(),
        }?;

        if value.is_empty() {
            return None;
        }
        if value.len() > MAX_ENV_VALUE_LEN {
            tracing::debug!(
                "Ignoring oversized environment variable {}: len={} (max={})",
                name,
                value.len(),
                MAX_ENV_VALUE_LEN
            );
            return None;
        }
        Some(value)
    }
}

impl Default for EnvVarAdapter {
    fn default() -> Self {
        Self::new()
    }
}
