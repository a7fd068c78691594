//! Directory businesses (dealers, workshops, rental shops).

use crate::ids::{BrandId, BusinessId, CategoryId};
use crate::slug::city_slug;
use serde::{Deserialize, Serialize};

/// A business listed in the directory.
///
/// Unlike brands and models, businesses carry a slug assigned when the
/// listing is created. Lookups compare against it verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Business {
    pub id: BusinessId,
    #[serde(rename = "nombre")]
    pub name: String,
    pub slug: String,
    #[serde(rename = "descripcion", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "categoria_id", default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<CategoryId>,
    #[serde(rename = "ciudad", default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(rename = "departamento", default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(rename = "direccion", default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(rename = "telefono", default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub whatsapp: Option<String>,
    #[serde(rename = "sitio_web", default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    /// Brands the business sells or services.
    #[serde(rename = "marcas_ids", default, skip_serializing_if = "Vec::is_empty")]
    pub brand_ids: Vec<BrandId>,
    #[serde(rename = "verificado", default)]
    pub verified: bool,
}

impl Business {
    pub fn new(id: impl Into<BusinessId>, name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            slug: slug.into(),
            description: None,
            category_id: None,
            city: None,
            department: None,
            address: None,
            phone: None,
            whatsapp: None,
            website: None,
            brand_ids: Vec::new(),
            verified: false,
        }
    }

    /// Slug of the business's city, used by `/ciudad/{slug}` listings.
    pub fn city_slug(&self) -> Option<String> {
        self.city.as_deref().map(city_slug).filter(|s| !s.is_empty())
    }

    /// Whether the business lists the given brand.
    pub fn carries_brand(&self, brand_id: &BrandId) -> bool {
        self.brand_ids.contains(brand_id)
    }
}
