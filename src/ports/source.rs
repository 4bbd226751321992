// SPDX-License-Identifier: MIT OR Apache-2.0

//! Document source trait definition.
//!
//! This module defines the `DocumentSource` trait, the port through which the
//! raw configuration document enters the crate. Loading happens once, before a
//! store is built; sources are not queried again afterwards.

use crate::domain::{ConfigDocument, Result};

/// A trait for sources that produce a raw configuration document.
///
/// # Examples
///
/// ```rust
/// use provcfg::domain::{ConfigDocument, Mapping, Result};
/// use provcfg::ports::DocumentSource;
///
/// struct InlineSource;
///
/// impl DocumentSource for InlineSource {
///     fn name(&self) -> &str {
///         "inline"
///     }
///
///     fn load(&self) -> Result<ConfigDocument> {
///         Ok(ConfigDocument::new().with_layer("all", Mapping::new()))
///     }
/// }
///
/// let document = InlineSource.load().unwrap();
/// assert_eq!(document.layer_names().collect::<Vec<_>>(), vec!["all"]);
/// ```
pub trait DocumentSource: Send + Sync {
    /// Returns a short identifier for this source, used in logs and errors.
    fn name(&self) -> &str;

    /// Produces the raw document.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying data cannot be read or parsed.
    fn load(&self) -> Result<ConfigDocument>;
}

impl DocumentSource for ConfigDocument {
    fn name(&self) -> &str {
        "in-memory"
    }

    fn load(&self) -> Result<ConfigDocument> {
        Ok(self.clone())
    }
}
