//! Frontend trait for turning source text into the syntax model.

use std::path::Path;

use crate::ast::Program;

/// Errors a frontend can return.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The grammar could not be loaded.
    #[error("language error: {0}")]
    Language(String),

    /// The source contains a syntax error.
    #[error("syntax error at {line}:{column}")]
    Syntax {
        /// Line of the first error (1-indexed).
        line: usize,
        /// Column of the first error (1-indexed).
        column: usize,
    },

    /// The tree nests deeper than the frontend is willing to lower.
    #[error("nesting deeper than {limit} levels at {line}:{column}")]
    TooDeep {
        /// Line of the first node past the limit (1-indexed).
        line: usize,
        /// Column of the first node past the limit (1-indexed).
        column: usize,
        /// Maximum supported depth.
        limit: usize,
    },

    /// The parser gave up on the input.
    #[error("parse failed")]
    ParseFailed,
}

/// A language frontend.
///
/// Implement this to lint a new source language. The frontend receives raw
/// source text and lowers it into a [`Program`].
pub trait SourceParser: Send + Sync {
    /// Language identifier (e.g., `"typescript"`).
    fn language_id(&self) -> &'static str;

    /// File extensions this frontend handles, with leading dot (e.g., `".ts"`).
    fn extensions(&self) -> &'static [&'static str];

    /// Returns true if this frontend handles `path`.
    fn handles(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| {
                self.extensions()
                    .iter()
                    .any(|known| known.strip_prefix('.') == Some(ext))
            })
    }

    /// Parses `source` read from `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the grammar cannot be loaded or parsing fails.
    fn parse(&self, path: &Path, source: &str) -> Result<Program, ParseError>;
}
