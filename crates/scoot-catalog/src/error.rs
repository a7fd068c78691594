//! Slug lookup error types.

use std::fmt;

use thiserror::Error;

/// Kind of record a slug was resolved against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Brand,
    Model,
    Business,
    Category,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Brand => "brand",
            EntityKind::Model => "model",
            EntityKind::Business => "business",
            EntityKind::Category => "category",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Errors from resolving a URL slug to a record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The path segment is not a well-formed slug.
    #[error("Invalid slug: {0:?}")]
    InvalidSlug(String),

    /// No record of this kind has the slug.
    #[error("{kind} not found: {slug}")]
    NotFound { kind: EntityKind, slug: String },
}

impl LookupError {
    pub(crate) fn not_found(kind: EntityKind, slug: &str) -> Self {
        LookupError::NotFound {
            kind,
            slug: slug.to_string(),
        }
    }

    /// Whether this is a not-found outcome (as opposed to malformed input).
    pub fn is_not_found(&self) -> bool {
        matches!(self, LookupError::NotFound { .. })
    }
}
