// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core types.
//!
//! This module contains the value tree, dotted keys, the raw document, and the
//! error type. It is independent of any file format or source.

pub mod config_key;
pub mod config_value;
pub mod document;
pub mod errors;
pub mod service;

// Re-export commonly used types
pub use config_key::ConfigKey;
pub use config_value::{ConfigValue, Mapping};
pub use document::{ConfigDocument, DEFAULTS_LAYER};
pub use errors::{ConfigError, Result};
pub use service::ConfigurationService;
