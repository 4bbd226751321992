// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing document source implementations.
//!
//! This module contains concrete implementations of the traits defined in the
//! ports layer, plus the environment adapter that tells the loader which file
//! and which environment layer to use.

#[cfg(feature = "env")]
pub mod env_var;
#[cfg(feature = "yaml")]
pub mod yaml_file;

// Re-export adapters based on feature flags
#[cfg(feature = "env")]
pub use env_var::EnvVarAdapter;
#[cfg(feature = "yaml")]
pub use yaml_file::{YamlFileAdapter, YamlParser};
