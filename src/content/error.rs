//! Store error taxonomy

use std::path::PathBuf;
use thiserror::Error;

/// Convenience alias used throughout the store
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Errors surfaced by the document store
///
/// Callers are expected to match on the variant: a missing identifier and a
/// present-but-broken document are different conditions and are never
/// collapsed into each other.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The requested storage identifier does not exist
    #[error("no document with identifier '{id}'")]
    NotFound { id: String },

    /// The document exists but its metadata header is unusable
    #[error("malformed document '{id}': {reason}")]
    MalformedDocument { id: String, reason: MalformedReason },

    /// Underlying filesystem failure
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    pub fn malformed(id: impl Into<String>, reason: MalformedReason) -> Self {
        Self::MalformedDocument {
            id: id.into(),
            reason,
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// The specific defect in a malformed document
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedReason {
    /// File does not begin with a front-matter marker line
    #[error("front-matter header is missing")]
    MissingHeader,

    /// Opening marker is never matched by a closing one
    #[error("front-matter header is never terminated")]
    UnterminatedHeader,

    /// Header is delimited but its contents do not parse as key/value pairs
    #[error("front-matter header is not valid YAML: {0}")]
    Header(String),

    /// A required field is absent from the header
    #[error("required field `{0}` is missing")]
    MissingField(&'static str),

    /// A required field is present but blank
    #[error("required field `{0}` is empty")]
    EmptyField(&'static str),
}
