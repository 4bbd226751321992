// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer.
//!
//! The resolved configuration store and the read-only consumers built on top of
//! it: search path resolution, the fact blacklist, and validation.

pub mod blacklist;
pub mod config_store;
pub mod path_resolver;
pub mod validator;

pub use blacklist::FactBlacklist;
pub use config_store::{ConfigStore, TEMPLATE_PATHS};
pub use path_resolver::{resolve_paths, PluginCategory};
pub use validator::validate;
