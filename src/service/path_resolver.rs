// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin search path resolution.
//!
//! Installers and brokers are loaded from directories. By default each category
//! has one directory under the application root (`installers/`, `brokers/`).
//! Setting `installer_path` or `broker_path` to a colon-separated list replaces
//! that default; relative entries are taken relative to the application root.
//!
//! Resolution is pure path arithmetic. Nothing here touches the filesystem.

use crate::domain::{ConfigError, ConfigKey, ConfigValue, ConfigurationService};
use std::fmt;
use std::path::{Component, Path, PathBuf};
use std::str::FromStr;

/// A kind of plugin that is discovered through a search path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PluginCategory {
    /// OS installers
    Installer,
    /// Configuration management brokers
    Broker,
}

impl PluginCategory {
    /// Every category, in a stable order.
    pub const ALL: [PluginCategory; 2] = [PluginCategory::Installer, PluginCategory::Broker];

    /// Returns the singular category name.
    pub fn name(self) -> &'static str {
        match self {
            PluginCategory::Installer => "installer",
            PluginCategory::Broker => "broker",
        }
    }

    /// Returns the name of the default directory for this category.
    pub fn plural(self) -> &'static str {
        match self {
            PluginCategory::Installer => "installers",
            PluginCategory::Broker => "brokers",
        }
    }

    /// Returns the key that overrides this category's search path.
    ///
    /// ```
    /// use provcfg::service::PluginCategory;
    ///
    /// assert_eq!(PluginCategory::Installer.option_key().as_str(), "installer_path");
    /// ```
    pub fn option_key(self) -> ConfigKey {
        ConfigKey::path_option(self.name())
    }
}

impl fmt::Display for PluginCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PluginCategory {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PluginCategory::ALL
            .into_iter()
            .find(|category| category.name() == s)
            .ok_or_else(|| ConfigError::UnknownCategory {
                name: s.to_string(),
            })
    }
}

/// Computes the ordered search path for a plugin category.
///
/// When the category's `<name>_path` setting holds a string, it is split on
/// `:`; empty entries are dropped, entries starting with `/` are kept as they
/// are, and the rest are joined onto `app_root` and normalized. Otherwise the
/// result is the single directory `app_root/<plural>`.
///
/// # Examples
///
/// ```
/// use provcfg::domain::{ConfigDocument, ConfigValue, Mapping};
/// use provcfg::service::{resolve_paths, ConfigStore, PluginCategory};
/// use std::path::{Path, PathBuf};
///
/// let mut defaults = Mapping::new();
/// defaults.insert("installer_path".to_string(), ConfigValue::from("/a:b:"));
/// let store = ConfigStore::new(ConfigDocument::new().with_layer("all", defaults), "test");
/// let root = Path::new("/opt/provision");
///
/// assert_eq!(
///     resolve_paths(PluginCategory::Installer, &store, root),
///     vec![PathBuf::from("/a"), PathBuf::from("/opt/provision/b")]
/// );
/// assert_eq!(
///     resolve_paths(PluginCategory::Broker, &store, root),
///     vec![PathBuf::from("/opt/provision/brokers")]
/// );
/// ```
pub fn resolve_paths(
    category: PluginCategory,
    store: &dyn ConfigurationService,
    app_root: &Path,
) -> Vec<PathBuf> {
    let key = category.option_key();
    let root = absolute_root(app_root);

    let paths = match store.lookup(&key).and_then(path_override) {
        Some(spec) => spec
            .split(':')
            .filter(|segment| !segment.is_empty())
            .map(|segment| {
                if segment.starts_with('/') {
                    PathBuf::from(segment)
                } else {
                    normalize(&root.join(segment))
                }
            })
            .collect(),
        None => vec![normalize(&root.join(category.plural()))],
    };

    tracing::debug!("Resolved {} search path: {:?}", category, paths);
    paths
}

/// Extracts the override string from a `<name>_path` value.
fn path_override(value: &ConfigValue) -> Option<String> {
    match value {
        ConfigValue::String(s) => Some(s.clone()),
        ConfigValue::Integer(_) | ConfigValue::Float(_) => value.scalar_string(),
        ConfigValue::Null => None,
        other => {
            tracing::warn!(
                "Ignoring search path override: expected a string, found {}",
                other.kind()
            );
            None
        }
    }
}

/// Anchors a relative application root at the current working directory.
fn absolute_root(app_root: &Path) -> PathBuf {
    if app_root.is_absolute() {
        return app_root.to_path_buf();
    }
    match std::env::current_dir() {
        Ok(cwd) => cwd.join(app_root),
        Err(e) => {
            tracing::warn!(
                "Cannot determine working directory for relative root {}: {}",
                app_root.display(),
                e
            );
            app_root.to_path_buf()
        }
    }
}

/// Lexically normalizes a path: removes `.` and resolves `..` against the
/// preceding component. `..` never climbs above the root.
///
/// ```
/// use provcfg::service::path_resolver::normalize;
/// use std::path::{Path, PathBuf};
///
/// assert_eq!(normalize(Path::new("/opt/app/./lib/../brokers")), PathBuf::from("/opt/app/brokers"));
/// assert_eq!(normalize(Path::new("/../x")), PathBuf::from("/x"));
/// ```
pub fn normalize(path: &Path) -> PathBuf {
    let mut result = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let last = result.components().next_back();
                let at_root = matches!(last, Some(Component::RootDir) | Some(Component::Prefix(_)));
                let after_name = matches!(last, Some(Component::Normal(_)));
                if after_name {
                    result.pop();
                } else if !at_root {
                    result.push(component.as_os_str());
                }
            }
            other => result.push(other.as_os_str()),
        }
    }
    result
}
