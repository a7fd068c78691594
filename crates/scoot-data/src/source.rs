//! The record-fetch seam.

use scoot_catalog::catalog::{Brand, Business, Category, ScooterModel};
use serde::{Deserialize, Serialize};

use crate::DataError;

/// All catalog collections, as exported from the database.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogSnapshot {
    #[serde(rename = "modelos")]
    pub models: Vec<ScooterModel>,
    #[serde(rename = "marcas")]
    pub brands: Vec<Brand>,
    #[serde(rename = "negocios")]
    pub businesses: Vec<Business>,
    #[serde(rename = "categorias")]
    pub categories: Vec<Category>,
}

impl CatalogSnapshot {
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
            && self.brands.is_empty()
            && self.businesses.is_empty()
            && self.categories.is_empty()
    }
}

/// Something that can hand out catalog records.
///
/// Callers fetch once and keep the collections in memory; nothing in the
/// filter or slug code calls a source directly.
pub trait CatalogSource {
    /// Short label for logs.
    fn name(&self) -> &str;

    fn fetch_models(&self) -> Result<Vec<ScooterModel>, DataError>;

    fn fetch_brands(&self) -> Result<Vec<Brand>, DataError>;

    fn fetch_businesses(&self) -> Result<Vec<Business>, DataError>;

    fn fetch_categories(&self) -> Result<Vec<Category>, DataError>;

    /// Fetch every collection. Fails if any one of them fails.
    fn fetch_snapshot(&self) -> Result<CatalogSnapshot, DataError> {
        Ok(CatalogSnapshot {
            models: self.fetch_models()?,
            brands: self.fetch_brands()?,
            businesses: self.fetch_businesses()?,
            categories: self.fetch_categories()?,
        })
    }
}
