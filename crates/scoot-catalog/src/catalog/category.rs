//! Directory categories.

use crate::ids::CategoryId;
use crate::slug::category_slug;
use serde::{Deserialize, Serialize};

/// A business category (e.g. "Concesionarios", "Talleres").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    #[serde(rename = "nombre")]
    pub name: String,
    /// Stored slug; older rows leave it empty and routes derive it from the name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(rename = "descripcion", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "icono", default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl Category {
    pub fn new(id: impl Into<CategoryId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            slug: None,
            description: None,
            icon: None,
        }
    }

    /// The slug routes use: the stored one when present, otherwise derived.
    pub fn route_slug(&self) -> String {
        match self.slug.as_deref().map(str::trim) {
            Some(stored) if !stored.is_empty() => stored.to_string(),
            _ => category_slug(&self.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_slug_prefers_stored() {
        let mut cat = Category::new("c-1", "Talleres de Servicio");
        assert_eq!(cat.route_slug(), "talleres-de-servicio");

        cat.slug = Some("talleres".to_string());
        assert_eq!(cat.route_slug(), "talleres");

        cat.slug = Some(" ".to_string());
        assert_eq!(cat.route_slug(), "talleres-de-servicio");
    }
}
