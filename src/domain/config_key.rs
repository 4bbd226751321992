// SPDX-License-Identifier: MIT OR Apache-2.0

//! Dotted configuration key.
//!
//! A `ConfigKey` names a value in the resolved configuration tree. Nested values
//! are addressed by joining mapping keys with `.`, so `"microkernel.debug_level"`
//! refers to `debug_level` inside the `microkernel` mapping.

use std::fmt;

/// A dotted path into the resolved configuration tree.
///
/// # Examples
///
/// ```
/// use provcfg::domain::config_key::ConfigKey;
///
/// let key = ConfigKey::from("facts.blacklist");
/// assert_eq!(key.as_str(), "facts.blacklist");
/// assert_eq!(key.segments().collect::<Vec<_>>(), vec!["facts", "blacklist"]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConfigKey(String);

impl ConfigKey {
    /// Creates a new `ConfigKey` from a `String`.
    pub fn new(key: String) -> Self {
        ConfigKey(key)
    }

    /// Builds the `<prefix>_path` key used for search path overrides.
    ///
    /// ```
    /// use provcfg::domain::config_key::ConfigKey;
    ///
    /// assert_eq!(ConfigKey::path_option("broker").as_str(), "broker_path");
    /// ```
    pub fn path_option(prefix: &str) -> Self {
        ConfigKey(format!("{}_path", prefix))
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Iterates over the `.`-separated segments of the key.
    ///
    /// Empty segments are yielded as-is; lookups treat them as missing.
    pub fn segments(&self) -> std::str::Split<'_, char> {
        self.0.split('.')
    }

    /// Converts the `ConfigKey` into its inner `String`.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for ConfigKey {
    fn from(s: String) -> Self {
        ConfigKey(s)
    }
}

impl From<&str> for ConfigKey {
    fn from(s: &str) -> Self {
        ConfigKey(s.to_string())
    }
}

impl From<ConfigKey> for String {
    fn from(key: ConfigKey) -> Self {
        key.0
    }
}

impl AsRef<str> for ConfigKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
