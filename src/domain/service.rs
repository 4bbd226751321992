// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration service trait definition.
//!
//! This module defines the `ConfigurationService` trait, the read-only interface
//! that path resolution, blacklist compilation, and validation are written
//! against. The resolved store implements it; tests may supply their own.

use crate::domain::{ConfigError, ConfigKey, ConfigValue, Result};

/// Read access to a resolved configuration tree.
///
/// Only [`lookup`](ConfigurationService::lookup) must be implemented; the other
/// methods are derived from it.
///
/// # Examples
///
/// ```rust
/// use provcfg::domain::{ConfigKey, ConfigValue, ConfigurationService};
///
/// struct FixedService(ConfigValue);
///
/// impl ConfigurationService for FixedService {
///     fn lookup(&self, key: &ConfigKey) -> Option<&ConfigValue> {
///         (key.as_str() == "checkin_interval").then_some(&self.0)
///     }
/// }
///
/// let service = FixedService(ConfigValue::Integer(30));
/// assert!(service.has(&ConfigKey::from("checkin_interval")));
/// assert!(service.get(&ConfigKey::from("missing")).is_err());
/// ```
pub trait ConfigurationService {
    /// Looks up the value at a dotted key.
    ///
    /// Returns `None` when any segment is missing, empty, or descends into a
    /// value that is not a mapping. Implementations must not fail or panic.
    fn lookup(&self, key: &ConfigKey) -> Option<&ConfigValue>;

    /// Retrieves an owned copy of the value at `key`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ConfigKeyNotFound`] when the key does not resolve.
    fn get(&self, key: &ConfigKey) -> Result<ConfigValue> {
        self.lookup(key)
            .cloned()
            .ok_or_else(|| ConfigError::ConfigKeyNotFound {
                key: key.as_str().to_string(),
            })
    }

    /// Retrieves the value at `key`, or `default` when it does not resolve.
    fn get_or_default(&self, key: &ConfigKey, default: ConfigValue) -> ConfigValue {
        self.lookup(key).cloned().unwrap_or(default)
    }

    /// Returns `true` when `key` resolves to a value (including an explicit null).
    fn has(&self, key: &ConfigKey) -> bool {
        self.lookup(key).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestConfigService {
        value: ConfigValue,
    }

    impl ConfigurationService for TestConfigService {
        fn lookup(&self, key: &ConfigKey) -> Option<&ConfigValue> {
            (key.as_str() == "test.key").then_some(&self.value)
        }
    }

    fn service() -> TestConfigService {
        TestConfigService {
            value: ConfigValue::from("test_value"),
        }
    }

    #[test]
    fn test_service_get() {
        let value = service().get(&ConfigKey::from("test.key")).unwrap();
        assert_eq!(value.as_str(), Some("test_value"));
    }

    #[test]
    fn test_service_get_missing() {
        let error = service().get(&ConfigKey::from("other.key")).unwrap_err();
        assert!(matches!(error, ConfigError::ConfigKeyNotFound { ref key } if key == "other.key"));
    }

    #[test]
    fn test_service_get_or_default() {
        let svc = service();
        let found = svc.get_or_default(&ConfigKey::from("test.key"), ConfigValue::from("d"));
        assert_eq!(found.as_str(), Some("test_value"));
        let fallback = svc.get_or_default(&ConfigKey::from("nope"), ConfigValue::from("d"));
        assert_eq!(fallback.as_str(), Some("d"));
    }

    #[test]
    fn test_service_has() {
        let svc = service();
        assert!(svc.has(&ConfigKey::from("test.key")));
        assert!(!svc.has(&ConfigKey::from("nope")));
    }
}
