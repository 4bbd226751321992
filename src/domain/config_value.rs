// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration value tree.
//!
//! This module provides the `ConfigValue` type, a recursive representation of a
//! parsed configuration document. Traversal code matches on the variants instead
//! of guessing the shape of a value.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// A string-keyed mapping of configuration values.
pub type Mapping = BTreeMap<String, ConfigValue>;

/// A node in the configuration tree.
///
/// Scalars, sequences, and mappings may nest arbitrarily. An absent value is
/// represented by `Option::None` at the API boundary, never by a variant.
///
/// # Examples
///
/// ```
/// use provcfg::domain::config_value::{ConfigValue, Mapping};
///
/// let mut microkernel = Mapping::new();
/// microkernel.insert("debug_level".to_string(), ConfigValue::from("info"));
/// let value = ConfigValue::Mapping(microkernel);
///
/// assert_eq!(value.get("debug_level").and_then(ConfigValue::as_str), Some("info"));
/// assert!(value.get("kernel_args").is_none());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ConfigValue {
    /// An explicit null (`~` or an empty value in YAML)
    #[default]
    Null,
    /// A boolean
    Bool(bool),
    /// A signed integer
    Integer(i64),
    /// A floating point number
    Float(f64),
    /// A string
    String(String),
    /// An ordered list of values
    Sequence(Vec<ConfigValue>),
    /// A nested mapping
    Mapping(Mapping),
}

impl ConfigValue {
    /// Returns the child stored under `key` when this value is a mapping.
    ///
    /// Returns `None` for an absent key and for any non-mapping value.
    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        match self {
            ConfigValue::Mapping(map) => map.get(key),
            _ => None,
        }
    }

    /// Returns the mapping if this value is one.
    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            ConfigValue::Mapping(map) => Some(map),
            _ => None,
        }
    }

    /// Returns the sequence if this value is one.
    pub fn as_sequence(&self) -> Option<&[ConfigValue]> {
        match self {
            ConfigValue::Sequence(seq) => Some(seq),
            _ => None,
        }
    }

    /// Returns the string if this value is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConfigValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the boolean if this value is a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ConfigValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the integer if this value is an integer.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ConfigValue::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the value as a float, widening integers.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ConfigValue::Float(f) => Some(*f),
            ConfigValue::Integer(n) => Some(*n as f64),
            _ => None,
        }
    }

    /// Returns `true` for `Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, ConfigValue::Null)
    }

    /// Returns `true` for booleans, numbers, and strings.
    pub fn is_scalar(&self) -> bool {
        matches!(
            self,
            ConfigValue::Bool(_)
                | ConfigValue::Integer(_)
                | ConfigValue::Float(_)
                | ConfigValue::String(_)
        )
    }

    /// Renders a non-null scalar as text.
    ///
    /// ```
    /// use provcfg::domain::config_value::ConfigValue;
    ///
    /// assert_eq!(ConfigValue::Integer(30).scalar_string().as_deref(), Some("30"));
    /// assert_eq!(ConfigValue::Null.scalar_string(), None);
    /// ```
    pub fn scalar_string(&self) -> Option<String> {
        match self {
            ConfigValue::String(s) => Some(s.clone()),
            ConfigValue::Bool(b) => Some(b.to_string()),
            ConfigValue::Integer(n) => Some(n.to_string()),
            ConfigValue::Float(f) => Some(f.to_string()),
            _ => None,
        }
    }

    /// Returns a short name for the variant, used in log messages.
    pub fn kind(&self) -> &'static str {
        match self {
            ConfigValue::Null => "null",
            ConfigValue::Bool(_) => "boolean",
            ConfigValue::Integer(_) => "integer",
            ConfigValue::Float(_) => "float",
            ConfigValue::String(_) => "string",
            ConfigValue::Sequence(_) => "sequence",
            ConfigValue::Mapping(_) => "mapping",
        }
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        ConfigValue::String(s.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        ConfigValue::String(s)
    }
}

impl From<bool> for ConfigValue {
    fn from(b: bool) -> Self {
        ConfigValue::Bool(b)
    }
}

impl From<i64> for ConfigValue {
    fn from(n: i64) -> Self {
        ConfigValue::Integer(n)
    }
}

impl From<f64> for ConfigValue {
    fn from(f: f64) -> Self {
        ConfigValue::Float(f)
    }
}

impl<T: Into<ConfigValue>> From<Vec<T>> for ConfigValue {
    fn from(items: Vec<T>) -> Self {
        ConfigValue::Sequence(items.into_iter().map(Into::into).collect())
    }
}

impl From<Mapping> for ConfigValue {
    fn from(map: Mapping) -> Self {
        ConfigValue::Mapping(map)
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::Null => write!(f, ""),
            ConfigValue::Bool(b) => write!(f, "{}", b),
            ConfigValue::Integer(n) => write!(f, "{}", n),
            ConfigValue::Float(x) => write!(f, "{}", x),
            ConfigValue::String(s) => write!(f, "{}", s),
            ConfigValue::Sequence(seq) => {
                write!(f, "[")?;
                for (i, item) in seq.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            ConfigValue::Mapping(map) => {
                write!(f, "{{")?;
                for (i, (key, item)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", key, item)?;
                }
                write!(f, "}}")
            }
        }
    }
}
