//! Brand records.

use crate::ids::BrandId;
use serde::{Deserialize, Serialize};

/// A scooter brand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brand {
    pub id: BrandId,
    #[serde(rename = "nombre")]
    pub name: String,
    /// Stored slug. Brand routes regenerate slugs from the name, so this is
    /// informational only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(rename = "descripcion", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "pais_origen", default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(rename = "sitio_web", default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

impl Brand {
    pub fn new(id: impl Into<BrandId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            slug: None,
            description: None,
            country: None,
            logo_url: None,
            website: None,
        }
    }
}
