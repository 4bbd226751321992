// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration validation.
//!
//! Checks run in registration order and validation stops at the first failure.
//! There is no aggregate report: an operator fixes one entry at a time.

use crate::domain::{ConfigError, ConfigKey, ConfigurationService, Result};
use crate::service::blacklist::{blacklist_entries, regex_fragment, FACTS_BLACKLIST_KEY};
use regex_lite::Regex;

/// A single validation check.
pub type Check = fn(&dyn ConfigurationService) -> Result<()>;

/// Every registered check, with the key it inspects.
pub const CHECKS: &[(&str, Check)] = &[(FACTS_BLACKLIST_KEY, check_facts_blacklist)];

/// Runs every registered check against `store`.
///
/// # Errors
///
/// Returns the first [`ConfigError::InvalidConfiguration`] raised by a check.
///
/// # Examples
///
/// ```
/// use provcfg::domain::{ConfigDocument, ConfigValue, Mapping};
/// use provcfg::service::{validate, ConfigStore};
///
/// let mut facts = Mapping::new();
/// facts.insert("blacklist".to_string(), ConfigValue::from(vec!["/(unclosed/"]));
/// let mut defaults = Mapping::new();
/// defaults.insert("facts".to_string(), ConfigValue::Mapping(facts));
///
/// let store = ConfigStore::new(ConfigDocument::new().with_layer("all", defaults), "test");
/// let error = validate(&store).unwrap_err();
/// assert_eq!(error.key(), Some("facts.blacklist"));
/// ```
pub fn validate(store: &dyn ConfigurationService) -> Result<()> {
    for (key, check) in CHECKS {
        tracing::debug!("Validating {}", key);
        check(store)?;
    }
    Ok(())
}

/// Checks that every `/…/` entry of `facts.blacklist` compiles on its own.
///
/// Literal entries are not checked.
pub fn check_facts_blacklist(store: &dyn ConfigurationService) -> Result<()> {
    let entries = blacklist_entries(store.lookup(&ConfigKey::from(FACTS_BLACKLIST_KEY)));

    for fragment in entries.iter().filter_map(|entry| regex_fragment(entry)) {
        if let Err(e) = Regex::new(fragment) {
            return Err(ConfigError::invalid(
                FACTS_BLACKLIST_KEY,
                format!(
                    "entry {} is not a valid regular expression: {}",
                    fragment, e
                ),
            ));
        }
    }
    Ok(())
}
