// SPDX-License-Identifier: MIT OR Apache-2.0

//! Resolved configuration store.
//!
//! This module provides `ConfigStore`, which merges the `"all"` layer of a
//! configuration document with the layer of the active environment and answers
//! queries against the result.

use crate::domain::{
    ConfigDocument, ConfigKey, ConfigValue, ConfigurationService, Mapping, Result,
};
use crate::ports::DocumentSource;
use crate::service::blacklist::{FactBlacklist, FACTS_BLACKLIST_KEY};
use crate::service::path_resolver::{resolve_paths, PluginCategory};
use crate::service::validator;
use once_cell::sync::OnceCell;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Keys whose values are exposed to templates.
pub const TEMPLATE_PATHS: &[&str] = &[
    "microkernel.debug_level",
    "microkernel.kernel_args",
    "checkin_interval",
];

/// The merged configuration for one environment.
///
/// Top-level keys of the environment layer replace those of the `"all"` layer
/// wholesale; nested mappings are not merged. The store is immutable once
/// built, apart from the lazily compiled fact blacklist.
///
/// # Examples
///
/// ```rust
/// use provcfg::prelude::*;
///
/// # fn main() -> Result<()> {
/// let parser = YamlParser::new();
/// let document = parser.parse(
///     "all:\n  checkin_interval: 15\n  microkernel:\n    debug_level: info\n\
///      production:\n  checkin_interval: 60\n",
/// )?;
///
/// let store = ConfigStore::new(document, "production");
/// assert_eq!(store.lookup(&"checkin_interval".into()), Some(&ConfigValue::Integer(60)));
/// assert_eq!(
///     store.lookup(&"microkernel.debug_level".into()),
///     Some(&ConfigValue::from("info"))
/// );
/// assert!(store.lookup(&"checkin_interval.seconds".into()).is_none());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ConfigStore {
    /// Name of the environment layer merged over the defaults
    environment: String,
    /// The merged top-level mapping
    values: Mapping,
    /// Compiled on first use
    fact_blacklist: OnceCell<FactBlacklist>,
}

impl ConfigStore {
    /// Builds a store by merging the `"all"` layer with the `environment` layer.
    ///
    /// Missing layers, and layers that are not mappings, count as empty.
    pub fn new(document: ConfigDocument, environment: impl Into<String>) -> Self {
        let environment = environment.into();
        let mut values = document.defaults();
        let overlay = document.layer(&environment);

        tracing::debug!(
            "Merging {} default keys with {} keys from environment '{}'",
            values.len(),
            overlay.len(),
            environment
        );
        values.extend(overlay);

        Self {
            environment,
            values,
            fact_blacklist: OnceCell::new(),
        }
    }

    /// Loads a document from `source` and builds a store from it.
    ///
    /// # Errors
    ///
    /// Propagates any error from the source.
    pub fn load(source: &dyn DocumentSource, environment: impl Into<String>) -> Result<Self> {
        let document = source.load()?;
        tracing::debug!("Loaded configuration document from {}", source.name());
        Ok(Self::new(document, environment))
    }

    /// Loads the store the way a deployed service does.
    ///
    /// The file is `explicit` if given, else the path in `PROVCFG_CONFIG`, else
    /// `config.yaml` under `app_root`. The environment comes from `PROVCFG_ENV`.
    #[cfg(all(feature = "yaml", feature = "env"))]
    pub fn from_environment(
        explicit: Option<&Path>,
        env: &crate::adapters::EnvVarAdapter,
        app_root: &Path,
    ) -> Result<Self> {
        let from_env = env.config_path();
        let source = crate::adapters::YamlFileAdapter::from_location(
            explicit,
            from_env.as_deref(),
            app_root,
        )?;
        Self::load(&source, env.environment())
    }

    /// Returns the name of the active environment.
    pub fn environment(&self) -> &str {
        &self.environment
    }

    /// Returns the merged top-level mapping.
    pub fn values(&self) -> &Mapping {
        &self.values
    }

    /// Returns the search path for installers.
    pub fn installer_paths(&self, app_root: &Path) -> Vec<PathBuf> {
        resolve_paths(PluginCategory::Installer, self, app_root)
    }

    /// Returns the search path for brokers.
    pub fn broker_paths(&self, app_root: &Path) -> Vec<PathBuf> {
        resolve_paths(PluginCategory::Broker, self, app_root)
    }

    /// Returns the compiled fact blacklist, compiling it on first use.
    ///
    /// A failed compilation is not cached.
    pub fn fact_blacklist(&self) -> Result<&FactBlacklist> {
        self.fact_blacklist.get_or_try_init(|| {
            FactBlacklist::from_value(self.lookup(&ConfigKey::from(FACTS_BLACKLIST_KEY)))
        })
    }

    /// Returns `true` if facts named `name` must be dropped.
    ///
    /// # Errors
    ///
    /// Fails if the blacklist does not compile; run [`validate`](Self::validate)
    /// at startup to catch this early.
    pub fn is_fact_blacklisted(&self, name: &str) -> Result<bool> {
        Ok(self.fact_blacklist()?.is_blacklisted(name))
    }

    /// Drops the compiled fact blacklist so that the next use recompiles it.
    pub fn invalidate_fact_blacklist(&mut self) {
        self.fact_blacklist.take();
    }

    /// Returns the values templates may read, keyed by dotted path.
    ///
    /// Keys that are not set are left out.
    pub fn template_values(&self) -> BTreeMap<String, ConfigValue> {
        TEMPLATE_PATHS
            .iter()
            .filter_map(|path| {
                self.lookup(&ConfigKey::from(*path))
                    .map(|value| (path.to_string(), value.clone()))
            })
            .collect()
    }

    /// Runs every registered validation check.
    pub fn validate(&self) -> Result<()> {
        validator::validate(self)
    }
}

impl ConfigurationService for ConfigStore {
    fn lookup(&self, key: &ConfigKey) -> Option<&ConfigValue> {
        let mut segments = key.segments();
        let first = segments.next().filter(|s| !s.is_empty())?;
        let mut current = self.values.get(first)?;
        for segment in segments {
            if segment.is_empty() {
                return None;
            }
            current = current.get(segment)?;
        }
        Some(current)
    }
}
