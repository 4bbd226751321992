// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fact name blacklist.
//!
//! Nodes report facts (named attributes) when they check in. The
//! `facts.blacklist` setting lists fact names that must be dropped. Each entry
//! is either a literal name or a regular expression written between slashes:
//!
//! ```yaml
//! facts:
//!   blacklist:
//!     - domain
//!     - /^macaddress_.*/
//! ```
//!
//! All entries are compiled into one anchored alternation, so a name is
//! blacklisted only if an entry matches it in full.

use crate::domain::{ConfigError, ConfigKey, ConfigValue, ConfigurationService, Result};
use regex_lite::Regex;

/// Key holding the list of blacklisted fact names and patterns.
pub const FACTS_BLACKLIST_KEY: &str = "facts.blacklist";

/// Returns the pattern between the slashes if `entry` is written as `/…/`.
///
/// ```
/// use provcfg::service::blacklist::regex_fragment;
///
/// assert_eq!(regex_fragment("/^ip_.*/"), Some("^ip_.*"));
/// assert_eq!(regex_fragment("hostname"), None);
/// assert_eq!(regex_fragment("/"), None);
/// ```
pub fn regex_fragment(entry: &str) -> Option<&str> {
    if entry.len() >= 2 && entry.starts_with('/') && entry.ends_with('/') {
        Some(&entry[1..entry.len() - 1])
    } else {
        None
    }
}

/// Coerces the raw `facts.blacklist` value into a list of entries.
///
/// An absent or null value is an empty list and a single scalar is a list of
/// one. Entries that are not scalars are skipped.
pub fn blacklist_entries(value: Option<&ConfigValue>) -> Vec<String> {
    match value {
        None | Some(ConfigValue::Null) => Vec::new(),
        Some(ConfigValue::Sequence(items)) => items
            .iter()
            .filter_map(|item| {
                let entry = item.scalar_string();
                if entry.is_none() {
                    tracing::warn!(
                        "Ignoring {} entry in {}: expected a string",
                        item.kind(),
                        FACTS_BLACKLIST_KEY
                    );
                }
                entry
            })
            .collect(),
        Some(ConfigValue::Mapping(_)) => {
            tracing::warn!(
                "Ignoring {}: expected a list of names, found a mapping",
                FACTS_BLACKLIST_KEY
            );
            Vec::new()
        }
        Some(scalar) => scalar.scalar_string().into_iter().collect(),
    }
}

/// A compiled fact blacklist.
///
/// # Examples
///
/// ```
/// use provcfg::service::FactBlacklist;
///
/// let blacklist = FactBlacklist::compile(["secret", "/^tmp_.*/"]).unwrap();
/// assert!(blacklist.is_blacklisted("secret"));
/// assert!(blacklist.is_blacklisted("tmp_x"));
/// assert!(!blacklist.is_blacklisted("secrets"));
/// assert!(!blacklist.is_blacklisted("other"));
/// ```
#[derive(Clone, Debug)]
pub struct FactBlacklist {
    entries: Vec<String>,
    /// `None` when there are no entries; nothing is blacklisted then
    regex: Option<Regex>,
}

impl FactBlacklist {
    /// Compiles a blacklist from its entries.
    ///
    /// Literal entries are escaped; `/…/` entries contribute their inner text
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidConfiguration`] for `facts.blacklist` if
    /// the combined pattern does not compile.
    pub fn compile<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries: Vec<String> = entries.into_iter().map(Into::into).collect();
        if entries.is_empty() {
            return Ok(Self {
                entries,
                regex: None,
            });
        }

        let alternation = entries
            .iter()
            .map(|entry| match regex_fragment(entry) {
                Some(fragment) => format!("(?:{})", fragment),
                None => format!("(?:{})", regex_lite::escape(entry)),
            })
            .collect::<Vec<_>>()
            .join("|");
        let pattern = format!("^(?:{})$", alternation);

        let regex = Regex::new(&pattern).map_err(|e| {
            ConfigError::invalid(
                FACTS_BLACKLIST_KEY,
                format!("cannot compile blacklist pattern {}: {}", pattern, e),
            )
        })?;
        tracing::debug!(
            "Compiled fact blacklist with {} entries: {}",
            entries.len(),
            pattern
        );

        Ok(Self {
            entries,
            regex: Some(regex),
        })
    }

    /// Compiles the blacklist from a raw `facts.blacklist` value.
    pub fn from_value(value: Option<&ConfigValue>) -> Result<Self> {
        Self::compile(blacklist_entries(value))
    }

    /// Compiles the blacklist stored in a configuration service.
    pub fn from_service(service: &dyn ConfigurationService) -> Result<Self> {
        Self::from_value(service.lookup(&ConfigKey::from(FACTS_BLACKLIST_KEY)))
    }

    /// Returns `true` if `name` matches an entry in full.
    pub fn is_blacklisted(&self, name: &str) -> bool {
        self.regex
            .as_ref()
            .is_some_and(|regex| regex.is_match(name))
    }

    /// Returns the compiled pattern, or `None` for an empty blacklist.
    pub fn pattern(&self) -> Option<&str> {
        self.regex.as_ref().map(Regex::as_str)
    }

    /// Returns the entries the blacklist was compiled from.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Returns `true` when there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
