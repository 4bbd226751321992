// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment-layered configuration for provisioning services.
//!
//! A provisioning service reads one YAML document that holds defaults under
//! `all` and per-environment overrides under the environment's name. This crate
//! resolves that document into a single tree for the active environment and
//! derives the settings the rest of the service consumes.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: Core types (`ConfigKey`, `ConfigValue`, `ConfigDocument`, errors)
//! - **Ports**: Trait definitions for loading documents (`DocumentParser`, `DocumentSource`)
//! - **Adapters**: YAML files and environment variables
//! - **Service**: The merged `ConfigStore` and the consumers built on it
//!
//! # Features
//!
//! - **Layering**: Environment values replace defaults key by key at the top level
//! - **Dotted lookup**: `"microkernel.debug_level"` walks nested mappings
//! - **Search paths**: `installer_path` / `broker_path` overrides or root-relative defaults
//! - **Fact blacklist**: literal names and `/regex/` patterns compiled into one matcher
//! - **Validation**: fail-fast checks that name the offending key
//!
//! # Feature Flags
//!
//! - `yaml`: Enable YAML file support (default)
//! - `env`: Enable environment variable support (default)
//! - `full`: Enable all features
//!
//! # Quick Start
//!
//! ```rust
//! use provcfg::prelude::*;
//! use std::path::{Path, PathBuf};
//!
//! # fn main() -> Result<()> {
//! let yaml = r#"
//! all:
//!   broker_path: "brokers:/usr/share/provision/brokers"
//!   facts:
//!     blacklist:
//!       - domain
//!       - /^macaddress_.*/
//! production:
//!   checkin_interval: 60
//! "#;
//!
//! let store = ConfigStore::new(YamlParser::new().parse(yaml)?, "production");
//! store.validate()?;
//!
//! let root = Path::new("/opt/provision");
//! assert_eq!(
//!     store.broker_paths(root),
//!     vec![
//!         PathBuf::from("/opt/provision/brokers"),
//!         PathBuf::from("/usr/share/provision/brokers"),
//!     ]
//! );
//! assert_eq!(store.installer_paths(root), vec![PathBuf::from("/opt/provision/installers")]);
//! assert!(store.is_fact_blacklisted("macaddress_eth0")?);
//! assert!(!store.is_fact_blacklisted("hostname")?);
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::domain::{
        ConfigDocument, ConfigError, ConfigKey, ConfigValue, ConfigurationService, Mapping, Result,
    };
    pub use crate::ports::{DocumentParser, DocumentSource};
    pub use crate::service::{
        resolve_paths, validate, ConfigStore, FactBlacklist, PluginCategory,
    };

    // Re-export adapters based on feature flags
    #[cfg(feature = "env")]
    pub use crate::adapters::EnvVarAdapter;
    #[cfg(feature = "yaml")]
    pub use crate::adapters::{YamlFileAdapter, YamlParser};
}
