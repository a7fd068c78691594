//! Built-in sample catalog used when the real source is unreachable.

use scoot_catalog::catalog::{Brand, Business, Category, ScooterModel};

use crate::{CatalogSnapshot, CatalogSource, DataError};

const MOCK_CATALOG: &str = include_str!("mock_catalog.json");

/// Sample Colombian dealers, brands and models.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockCatalog;

impl MockCatalog {
    pub fn new() -> Self {
        Self
    }

    /// Parse the embedded sample snapshot.
    pub fn snapshot() -> Result<CatalogSnapshot, DataError> {
        Ok(serde_json::from_str(MOCK_CATALOG)?)
    }
}

impl CatalogSource for MockCatalog {
    fn name(&self) -> &str {
        "mock"
    }

    fn fetch_models(&self) -> Result<Vec<ScooterModel>, DataError> {
        Ok(Self::snapshot()?.models)
    }

    fn fetch_brands(&self) -> Result<Vec<Brand>, DataError> {
        Ok(Self::snapshot()?.brands)
    }

    fn fetch_businesses(&self) -> Result<Vec<Business>, DataError> {
        Ok(Self::snapshot()?.businesses)
    }

    fn fetch_categories(&self) -> Result<Vec<Category>, DataError> {
        Ok(Self::snapshot()?.categories)
    }

    fn fetch_snapshot(&self) -> Result<CatalogSnapshot, DataError> {
        Self::snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scoot_catalog::slug::is_valid_slug;

    #[test]
    fn test_embedded_snapshot_parses() {
        let snapshot = MockCatalog::snapshot().unwrap();
        assert_eq!(snapshot.brands.len(), 5);
        assert_eq!(snapshot.models.len(), 6);
        assert_eq!(snapshot.businesses.len(), 3);
        assert_eq!(snapshot.categories.len(), 3);
    }

    #[test]
    fn test_every_model_references_a_brand() {
        let snapshot = MockCatalog::snapshot().unwrap();
        for model in &snapshot.models {
            assert!(
                snapshot.brands.iter().any(|b| b.id == model.brand_id),
                "{} has no brand row",
                model.name
            );
        }
    }

    #[test]
    fn test_business_slugs_are_url_safe() {
        let snapshot = MockCatalog.fetch_snapshot().unwrap();
        assert!(snapshot.businesses.iter().all(|b| is_valid_slug(&b.slug)));
    }
}
