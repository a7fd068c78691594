//! Newtype IDs for type-safe identifiers.
//!
//! Records arrive from the hosted database with string primary keys
//! (UUIDs). Wrapping them keeps a `BrandId` from being passed where a
//! `ModelId` is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate newtype ID structs.
macro_rules! define_id {
    ($name:ident) => {
        /// A record identifier as stored in the database.
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume and return the inner string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(ModelId);
define_id!(BrandId);
define_id!(BusinessId);
define_id!(CategoryId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_from_str() {
        let id: ModelId = "mod-456".into();
        assert_eq!(id.as_str(), "mod-456");
        assert_eq!(format!("{}", id), "mod-456");
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let id = BrandId::new("b-1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"b-1\"");
        let back: BrandId = serde_json::from_str("\"b-1\"").unwrap();
        assert_eq!(back, id);
    }
}
