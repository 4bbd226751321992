// SPDX-License-Identifier: MIT OR Apache-2.0

//! Raw configuration document.
//!
//! A document is the parsed form of a configuration file before any merging
//! has happened. Its top-level keys name layers: `"all"` holds the defaults
//! shared by every environment and each other key holds the overrides for one
//! environment.

use crate::domain::config_value::{ConfigValue, Mapping};

/// Name of the layer that applies to every environment.
pub const DEFAULTS_LAYER: &str = "all";

/// A parsed configuration document, keyed by layer name.
///
/// # Examples
///
/// ```
/// use provcfg::domain::{ConfigDocument, ConfigValue, Mapping};
///
/// let mut defaults = Mapping::new();
/// defaults.insert("checkin_interval".to_string(), ConfigValue::Integer(15));
///
/// let document = ConfigDocument::new()
///     .with_layer("all", defaults)
///     .with_layer("production", ConfigValue::from("not a mapping"));
///
/// assert_eq!(document.defaults().len(), 1);
/// assert!(document.layer("production").is_empty());
/// assert!(document.layer("test").is_empty());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConfigDocument {
    layers: Mapping,
}

impl ConfigDocument {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a layer, returning the document.
    pub fn with_layer(mut self, name: impl Into<String>, layer: impl Into<ConfigValue>) -> Self {
        self.layers.insert(name.into(), layer.into());
        self
    }

    /// Returns the raw value stored under a top-level key.
    pub fn raw_layer(&self, name: &str) -> Option<&ConfigValue> {
        self.layers.get(name)
    }

    /// Returns the named layer as a mapping.
    ///
    /// An absent layer, a null layer, or a layer that is not a mapping are all
    /// treated as empty.
    pub fn layer(&self, name: &str) -> Mapping {
        match self.layers.get(name) {
            Some(ConfigValue::Mapping(map)) => map.clone(),
            Some(ConfigValue::Null) | None => Mapping::new(),
            Some(other) => {
                tracing::warn!(
                    "Ignoring configuration layer '{}': expected a mapping, found {}",
                    name,
                    other.kind()
                );
                Mapping::new()
            }
        }
    }

    /// Returns the `"all"` defaults layer.
    pub fn defaults(&self) -> Mapping {
        self.layer(DEFAULTS_LAYER)
    }

    /// Returns the names of all top-level layers.
    pub fn layer_names(&self) -> impl Iterator<Item = &str> {
        self.layers.keys().map(String::as_str)
    }

    /// Returns `true` when the document has no layers at all.
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

impl From<Mapping> for ConfigDocument {
    fn from(layers: Mapping) -> Self {
        Self { layers }
    }
}
