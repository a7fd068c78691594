//! Data access error types.

use scoot_catalog::{EntityKind, LookupError};
use thiserror::Error;

/// Errors that can occur when loading or querying the catalog.
#[derive(Error, Debug)]
pub enum DataError {
    /// The catalog could not be read.
    #[error("Failed to read catalog: {0}")]
    Io(String),

    /// The catalog was read but is not valid JSON for the expected shape.
    #[error("Failed to parse catalog: {0}")]
    Parse(String),

    /// The source is configured but cannot serve records.
    #[error("Catalog source unavailable: {0}")]
    Unavailable(String),

    /// A URL slug is malformed.
    #[error("Invalid slug: {0:?}")]
    InvalidSlug(String),

    /// No record matches the slug.
    #[error("{kind} not found: {slug}")]
    NotFound { kind: EntityKind, slug: String },
}

impl DataError {
    /// Whether page handlers should answer 404 for this error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, DataError::NotFound { .. } | DataError::InvalidSlug(_))
    }
}

impl From<std::io::Error> for DataError {
    fn from(e: std::io::Error) -> Self {
        DataError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for DataError {
    fn from(e: serde_json::Error) -> Self {
        DataError::Parse(e.to_string())
    }
}

impl From<LookupError> for DataError {
    fn from(e: LookupError) -> Self {
        match e {
            LookupError::InvalidSlug(slug) => DataError::InvalidSlug(slug),
            LookupError::NotFound { kind, slug } => DataError::NotFound { kind, slug },
        }
    }
}
