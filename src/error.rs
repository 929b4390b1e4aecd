//! Error types shared by every outline operation.
//!
//! The taxonomy is small because the core only ever works on matches the
//! configured matcher hands it. Anything that goes wrong is either a bad
//! configuration, a matcher that breaks its forward-progress contract, or a
//! caller asking for a range the document does not have.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading configuration or transforming a document.
#[derive(Debug, Error)]
pub enum Error {
    /// Error reading or writing a file.
    #[error("I/O error on {path}: {error}")]
    Io {
        /// Path of the file being accessed.
        path: PathBuf,
        /// The underlying I/O error.
        error: std::io::Error,
    },

    /// The configuration file could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The `format` key named a matcher that does not exist.
    #[error("unknown heading format: {0} (expected 'plain' or 'markdown')")]
    UnknownFormat(String),

    /// The heading pattern is not a valid regular expression.
    #[error("invalid heading pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// The heading pattern does not define the named capture group.
    #[error("heading pattern has no capture group named '{0}'")]
    MissingGroup(String),

    /// A heading deeper than the top level matched without a last component.
    #[error("heading '{number}' at byte {offset} has no last-component match; check `last_group`")]
    MissingLastComponent {
        /// Byte offset of the heading number.
        offset: usize,
        /// The heading number as it appeared in the document.
        number: String,
    },

    /// The matcher returned a match that would not move the scan forward.
    #[error("heading matcher made no progress at byte {offset}")]
    StalledMatcher {
        /// Cursor position at which the scan stalled.
        offset: usize,
    },

    /// A span does not lie within the document on character boundaries.
    #[error("span {start}..{end} is outside the document (length {len})")]
    InvalidSpan {
        /// Start of the span.
        start: usize,
        /// End of the span.
        end: usize,
        /// Length of the document in bytes.
        len: usize,
    },

    /// A promote/demote range is reversed or out of bounds.
    #[error("range {start}..{end} is not a valid range of a {len}-byte document")]
    InvalidRange {
        /// Start of the requested range.
        start: usize,
        /// End of the requested range.
        end: usize,
        /// Length of the document in bytes.
        len: usize,
    },

    /// A tree-sitter grammar or query failed to load.
    #[error("grammar error: {0}")]
    Grammar(String),

    /// An outline could not be serialised.
    #[error("failed to serialise outline: {0}")]
    Json(#[from] serde_json::Error),

    /// Directory traversal failed while discovering documents.
    #[error("failed to walk directory: {0}")]
    Walk(String),
}

/// Result type for outline operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Wrap an I/O error with the path that produced it.
    pub fn io(path: impl Into<PathBuf>, error: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            error,
        }
    }
}
