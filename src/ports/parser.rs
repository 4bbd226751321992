// SPDX-License-Identifier: MIT OR Apache-2.0

//! Document parser trait definition.
//!
//! This module defines the `DocumentParser` trait, which turns the text of a
//! configuration file into a layered [`ConfigDocument`].

use crate::domain::{ConfigDocument, Result};

/// A trait for parsing configuration file contents.
///
/// The parsed document keeps its nested structure; nothing is flattened. The
/// top-level keys of the input become the document's layer names.
///
/// # Examples
///
/// ```rust
/// use provcfg::domain::{ConfigDocument, Result};
/// use provcfg::ports::DocumentParser;
///
/// struct EmptyParser;
///
/// impl DocumentParser for EmptyParser {
///     fn parse(&self, _content: &str) -> Result<ConfigDocument> {
///         Ok(ConfigDocument::new())
///     }
///
///     fn supported_extensions(&self) -> &[&str] {
///         &["empty"]
///     }
/// }
///
/// let document = EmptyParser.parse("anything").unwrap();
/// assert!(document.is_empty());
/// ```
pub trait DocumentParser {
    /// Parses configuration content into a document.
    ///
    /// Empty input yields an empty document rather than an error.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ParseError`](crate::domain::ConfigError::ParseError)
    /// when the content is not well-formed.
    fn parse(&self, content: &str) -> Result<ConfigDocument>;

    /// Returns the file extensions this parser understands, without the dot.
    fn supported_extensions(&self) -> &[&str];

    /// Returns `true` if this parser understands the given extension.
    ///
    /// The comparison ignores ASCII case.
    fn supports_extension(&self, extension: &str) -> bool {
        self.supported_extensions()
            .iter()
            .any(|ext| ext.eq_ignore_ascii_case(extension))
    }
}
