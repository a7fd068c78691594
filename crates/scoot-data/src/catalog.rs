//! In-memory catalog loaded once from a [`CatalogSource`].

use std::collections::HashMap;

use scoot_catalog::catalog::{Brand, Business, Category, ScooterModel};
use scoot_catalog::search::{filter_models, sort_models, FilterState, SortOption};
use scoot_catalog::slug::{
    businesses_in_city, find_brand_by_slug, find_business_by_slug, find_category_by_slug,
    find_model_by_slug, model_brand_slug, model_path, model_paths, models_for_brand,
    unique_model_slug, BrandSlugTable, SlugIndex,
};
use scoot_catalog::ModelId;
use tracing::{debug, error, warn};

use crate::{CatalogSnapshot, CatalogSource, DataError, MockCatalog};

/// Where the loaded records came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogOrigin {
    /// Fetched from the named source.
    Source(String),
    /// The built-in sample data.
    Mock,
}

/// The four catalog collections plus the brand slug table used to route them.
#[derive(Debug, Clone)]
pub struct Catalog {
    snapshot: CatalogSnapshot,
    origin: CatalogOrigin,
    table: BrandSlugTable,
    /// Page path per routable model, rebuilt whenever the table changes.
    paths: HashMap<ModelId, String>,
}

impl Catalog {
    /// Wrap already-fetched records.
    pub fn from_snapshot(snapshot: CatalogSnapshot, origin: CatalogOrigin) -> Self {
        Self {
            snapshot,
            origin,
            table: BrandSlugTable::builtin().clone(),
            paths: HashMap::new(),
        }
        .routed()
    }

    fn routed(mut self) -> Self {
        self.paths = model_paths(self.models(), self.brands(), &self.table);
        self
    }

    /// Fetch every collection from `source`.
    pub fn load(source: &dyn CatalogSource) -> Result<Self, DataError> {
        let snapshot = source.fetch_snapshot()?;
        debug!(
            source = source.name(),
            models = snapshot.models.len(),
            brands = snapshot.brands.len(),
            "loaded catalog"
        );
        Ok(Self::from_snapshot(
            snapshot,
            CatalogOrigin::Source(source.name().to_string()),
        ))
    }

    /// Fetch from `source`, falling back to the sample data on any error.
    pub fn load_or_mock(source: &dyn CatalogSource) -> Self {
        match Self::load(source) {
            Ok(catalog) => catalog,
            Err(e) => {
                warn!(source = source.name(), error = %e, "catalog source failed, using mock data");
                Self::mock()
            }
        }
    }

    /// The built-in sample catalog.
    pub fn mock() -> Self {
        let snapshot = MockCatalog::snapshot().unwrap_or_else(|e| {
            error!(error = %e, "embedded mock catalog is malformed");
            CatalogSnapshot::default()
        });
        Self::from_snapshot(snapshot, CatalogOrigin::Mock)
    }

    /// Replace the brand slug table (e.g. builtin plus configured overrides).
    pub fn with_brand_table(mut self, table: BrandSlugTable) -> Self {
        self.table = table;
        self.routed()
    }

    pub fn origin(&self) -> &CatalogOrigin {
        &self.origin
    }

    pub fn is_mock(&self) -> bool {
        self.origin == CatalogOrigin::Mock
    }

    pub fn brand_table(&self) -> &BrandSlugTable {
        &self.table
    }

    pub fn snapshot(&self) -> &CatalogSnapshot {
        &self.snapshot
    }

    pub fn models(&self) -> &[ScooterModel] {
        &self.snapshot.models
    }

    pub fn brands(&self) -> &[Brand] {
        &self.snapshot.brands
    }

    pub fn businesses(&self) -> &[Business] {
        &self.snapshot.businesses
    }

    pub fn categories(&self) -> &[Category] {
        &self.snapshot.categories
    }

    /// Build a slug index for repeated lookups.
    pub fn index(&self) -> SlugIndex<'_> {
        SlugIndex::build(
            self.models(),
            self.brands(),
            self.businesses(),
            self.categories(),
            &self.table,
        )
    }

    pub fn brand_by_slug(&self, slug: &str) -> Result<&Brand, DataError> {
        Ok(find_brand_by_slug(self.brands(), &self.table, slug)?)
    }

    pub fn model_by_slug(&self, brand_slug: &str, model_slug: &str) -> Result<&ScooterModel, DataError> {
        Ok(find_model_by_slug(
            self.models(),
            self.brands(),
            &self.table,
            brand_slug,
            model_slug,
        )?)
    }

    pub fn business_by_slug(&self, slug: &str) -> Result<&Business, DataError> {
        Ok(find_business_by_slug(self.businesses(), slug)?)
    }

    pub fn category_by_slug(&self, slug: &str) -> Result<&Category, DataError> {
        Ok(find_category_by_slug(self.categories(), slug)?)
    }

    pub fn models_for_brand(&self, brand_slug: &str) -> Result<Vec<&ScooterModel>, DataError> {
        Ok(models_for_brand(self.models(), self.brands(), &self.table, brand_slug)?)
    }

    pub fn businesses_in_city(&self, city_slug: &str) -> Result<Vec<&Business>, DataError> {
        Ok(businesses_in_city(self.businesses(), city_slug)?)
    }

    /// Models passing `filters`, in `sort` order.
    pub fn search(&self, filters: &FilterState, sort: SortOption) -> Vec<ScooterModel> {
        let mut visible: Vec<ScooterModel> = filter_models(self.models(), filters)
            .into_iter()
            .cloned()
            .collect();
        sort_models(&mut visible, sort);
        visible
    }

    /// Page paths of every routable model, keyed by model id.
    pub fn model_paths(&self) -> &HashMap<ModelId, String> {
        &self.paths
    }

    /// Page path for a model in this catalog.
    ///
    /// The brand slug comes from the brand row when present, else from the
    /// model's denormalized brand name. `None` when neither is known.
    pub fn model_path(&self, model: &ScooterModel) -> Option<String> {
        if let Some(path) = self.paths.get(&model.id) {
            return Some(path.clone());
        }
        let brand_slug = model_brand_slug(model, self.brands(), &self.table)?;
        let model_slug = unique_model_slug(model, self.models(), self.brands(), &self.table);
        Some(model_path(&brand_slug, &model_slug))
    }
}
