// SPDX-License-Identifier: MIT OR Apache-2.0

//! YAML configuration document adapter.
//!
//! This module provides a parser that turns YAML text into a layered
//! [`ConfigDocument`], and a source that reads such a document from a file.

use crate::domain::{ConfigDocument, ConfigError, ConfigValue, Mapping, Result};
use crate::ports::{DocumentParser, DocumentSource};
use std::fs;
use std::path::{Path, PathBuf};

/// Maximum allowed file size for YAML configuration files (10MB)
/// This prevents denial of service attacks via extremely large files
const MAX_YAML_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// File name looked up under the application root when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "config.yaml";

/// YAML parser implementation.
///
/// The parsed tree keeps its nesting. Mapping keys that are numbers or booleans
/// are converted to their string form; other non-string keys are dropped.
///
/// # Examples
///
/// ```rust
/// use provcfg::adapters::YamlParser;
/// use provcfg::ports::DocumentParser;
///
/// let parser = YamlParser::new();
/// let yaml = "all:\n  checkin_interval: 15\nproduction:\n  checkin_interval: 60";
/// let document = parser.parse(yaml).unwrap();
/// assert_eq!(document.layer("production")["checkin_interval"].as_i64(), Some(60));
/// ```
#[derive(Debug, Clone)]
pub struct YamlParser;

impl YamlParser {
    /// Creates a new YAML parser.
    pub fn new() -> Self {
        YamlParser
    }

    /// Converts a YAML node into a configuration value.
    fn convert(value: serde_yaml::Value) -> ConfigValue {
        match value {
            serde_yaml::Value::Null => ConfigValue::Null,
            serde_yaml::Value::Bool(b) => ConfigValue::Bool(b),
            serde_yaml::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    ConfigValue::Integer(i)
                } else {
                    // u64 above i64::MAX lands here too
                    ConfigValue::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_yaml::Value::String(s) => ConfigValue::String(s),
            serde_yaml::Value::Sequence(seq) => {
                ConfigValue::Sequence(seq.into_iter().map(Self::convert).collect())
            }
            serde_yaml::Value::Mapping(map) => ConfigValue::Mapping(Self::convert_mapping(map)),
            serde_yaml::Value::Tagged(tagged) => Self::convert(tagged.value),
        }
    }

    fn convert_mapping(map: serde_yaml::Mapping) -> Mapping {
        let mut result = Mapping::new();
        for (key, val) in map {
            let key = match key {
                serde_yaml::Value::String(s) => s,
                serde_yaml::Value::Number(n) => n.to_string(),
                serde_yaml::Value::Bool(b) => b.to_string(),
                other => {
                    tracing::debug!("Skipping YAML mapping entry with non-scalar key: {:?}", other);
                    continue;
                }
            };
            result.insert(key, Self::convert(val));
        }
        result
    }
}

impl Default for YamlParser {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentParser for YamlParser {
    fn parse(&self, content: &str) -> Result<ConfigDocument> {
        if content.trim().is_empty() {
            return Ok(ConfigDocument::new());
        }

        let value: serde_yaml::Value =
            serde_yaml::from_str(content).map_err(|e| ConfigError::ParseError {
                message: format!("Failed to parse YAML: {}", e),
                source: Some(Box::new(e)),
            })?;

        match Self::convert(value) {
            ConfigValue::Mapping(layers) => Ok(ConfigDocument::from(layers)),
            ConfigValue::Null => Ok(ConfigDocument::new()),
            other => {
                tracing::warn!(
                    "YAML configuration has a top-level {}, expected a mapping; ignoring it",
                    other.kind()
                );
                Ok(ConfigDocument::new())
            }
        }
    }

    fn supported_extensions(&self) -> &[&str] {
        &["yaml", "yml"]
    }
}

/// Document source adapter for YAML files.
///
/// The file is read and parsed once, when the adapter is created.
///
/// # Examples
///
/// ```rust,no_run
/// use provcfg::adapters::YamlFileAdapter;
/// use provcfg::ports::DocumentSource;
///
/// let adapter = YamlFileAdapter::from_file("/opt/provision/config.yaml").unwrap();
/// let document = adapter.load().unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct YamlFileAdapter {
    /// Path to the YAML file
    file_path: PathBuf,
    /// Parsed document
    document: ConfigDocument,
}

impl YamlFileAdapter {
    /// Creates a new YAML file adapter from a specific file path.
    ///
    /// # Errors
    ///
    /// Returns a `SourceError` if the file cannot be found, is larger than
    /// 10MB, or cannot be read, and a `ParseError` if it is not valid YAML.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file_path = path.as_ref().to_path_buf();
        let parser = YamlParser::new();

        // Canonicalize path to prevent directory traversal attacks
        let canonical_path = file_path
            .canonicalize()
            .map_err(|e| source_error("Invalid or inaccessible path", &file_path, e))?;

        // Check file size before reading to prevent DoS via large files
        let metadata = fs::metadata(&canonical_path)
            .map_err(|e| source_error("Failed to read file metadata", &canonical_path, e))?;

        if metadata.len() > MAX_YAML_FILE_SIZE {
            return Err(ConfigError::SourceError {
                source_name: "yaml-file".to_string(),
                message: format!(
                    "Configuration file too large: {} bytes (max {} bytes)",
                    metadata.len(),
                    MAX_YAML_FILE_SIZE
                ),
                source: None,
            });
        }

        let content = fs::read_to_string(&canonical_path)
            .map_err(|e| source_error("Failed to read configuration file", &canonical_path, e))?;

        let document = parser.parse(&content)?;
        tracing::debug!(
            "Loaded configuration from {} ({} layers)",
            canonical_path.display(),
            document.layer_names().count()
        );

        Ok(Self {
            file_path: canonical_path,
            document,
        })
    }

    /// Picks the configuration file to read.
    ///
    /// The first of these that is set wins: an explicit path, a path taken from
    /// the environment, and finally `config.yaml` under the application root.
    ///
    /// ```rust
    /// use provcfg::adapters::YamlFileAdapter;
    /// use std::path::{Path, PathBuf};
    ///
    /// let root = Path::new("/opt/provision");
    /// assert_eq!(
    ///     YamlFileAdapter::locate(None, None, root),
    ///     PathBuf::from("/opt/provision/config.yaml")
    /// );
    /// assert_eq!(
    ///     YamlFileAdapter::locate(None, Some(Path::new("/etc/prov.yaml")), root),
    ///     PathBuf::from("/etc/prov.yaml")
    /// );
    /// ```
    pub fn locate(explicit: Option<&Path>, from_env: Option<&Path>, app_root: &Path) -> PathBuf {
        explicit
            .or(from_env)
            .map(Path::to_path_buf)
            .unwrap_or_else(|| app_root.join(DEFAULT_CONFIG_FILE))
    }

    /// Locates the configuration file as [`locate`](Self::locate) does and reads it.
    pub fn from_location(
        explicit: Option<&Path>,
        from_env: Option<&Path>,
        app_root: &Path,
    ) -> Result<Self> {
        Self::from_file(Self::locate(explicit, from_env, app_root))
    }

    /// Returns the path to the configuration file.
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }
}

impl DocumentSource for YamlFileAdapter {
    fn name(&self) -> &str {
        "yaml-file"
    }

    fn load(&self) -> Result<ConfigDocument> {
        Ok(self.document.clone())
    }
}

fn source_error(what: &str, path: &Path, err: std::io::Error) -> ConfigError {
    ConfigError::SourceError {
        source_name: "yaml-file".to_string(),
        message: format!(
            "{}: {}",
            what,
            path.file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("<unknown>")
        ),
        source: Some(Box::new(err)),
    }
}
