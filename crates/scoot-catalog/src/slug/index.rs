//! Precomputed slug index.
//!
//! Built once after the catalog is fetched. Answers exactly like the
//! linear scans in [`lookup`](super::lookup): same first-match rules, same
//! not-found and invalid-slug outcomes.

use std::collections::{HashMap, HashSet};

use crate::catalog::{Brand, Business, Category, ScooterModel};
use crate::error::{EntityKind, LookupError};

use super::lookup::ensure_valid;
use super::unique::{routed_slugs, BrandRoutes};
use super::BrandSlugTable;

/// Slug → record maps over borrowed catalog collections.
#[derive(Debug)]
pub struct SlugIndex<'a> {
    models: &'a [ScooterModel],
    brands: &'a [Brand],
    businesses: &'a [Business],
    categories: &'a [Category],
    brand_by_slug: HashMap<String, usize>,
    /// Keyed by (brand slug, model slug).
    model_by_route: HashMap<(String, String), usize>,
    /// Brand slugs some model routes under.
    routed_brands: HashSet<String>,
    business_by_slug: HashMap<String, usize>,
    category_by_slug: HashMap<String, usize>,
}

impl<'a> SlugIndex<'a> {
    /// Index the given collections.
    pub fn build(
        models: &'a [ScooterModel],
        brands: &'a [Brand],
        businesses: &'a [Business],
        categories: &'a [Category],
        table: &BrandSlugTable,
    ) -> Self {
        let mut brand_by_slug = HashMap::with_capacity(brands.len());
        for (i, brand) in brands.iter().enumerate() {
            brand_by_slug.entry(table.brand_slug(&brand.name)).or_insert(i);
        }

        let routes = BrandRoutes::new(brands, table);
        let slugs = routed_slugs(models, &routes);
        let mut model_by_route = HashMap::with_capacity(models.len());
        let mut routed_brands = HashSet::new();
        for (i, model) in models.iter().enumerate() {
            let (Some(brand_slug), Some(slug)) = (routes.brand_slug(model), slugs.get(&model.id))
            else {
                continue;
            };
            routed_brands.insert(brand_slug.clone());
            model_by_route.entry((brand_slug, slug.clone())).or_insert(i);
        }

        let mut business_by_slug = HashMap::with_capacity(businesses.len());
        for (i, business) in businesses.iter().enumerate() {
            business_by_slug.entry(business.slug.clone()).or_insert(i);
        }

        let mut category_by_slug = HashMap::with_capacity(categories.len());
        for (i, category) in categories.iter().enumerate() {
            category_by_slug.entry(category.route_slug()).or_insert(i);
        }

        Self {
            models,
            brands,
            businesses,
            categories,
            brand_by_slug,
            model_by_route,
            routed_brands,
            business_by_slug,
            category_by_slug,
        }
    }

    pub fn brand(&self, slug: &str) -> Result<&'a Brand, LookupError> {
        ensure_valid(slug)?;
        self.brand_by_slug
            .get(slug)
            .map(|&i| &self.brands[i])
            .ok_or_else(|| LookupError::not_found(EntityKind::Brand, slug))
    }

    pub fn model(&self, brand_slug: &str, model_slug: &str) -> Result<&'a ScooterModel, LookupError> {
        ensure_valid(brand_slug)?;
        ensure_valid(model_slug)?;

        match self
            .model_by_route
            .get(&(brand_slug.to_string(), model_slug.to_string()))
        {
            Some(&i) => Ok(&self.models[i]),
            None if self.brand_by_slug.contains_key(brand_slug)
                || self.routed_brands.contains(brand_slug) =>
            {
                Err(LookupError::not_found(EntityKind::Model, model_slug))
            }
            None => Err(LookupError::not_found(EntityKind::Brand, brand_slug)),
        }
    }

    pub fn business(&self, slug: &str) -> Result<&'a Business, LookupError> {
        ensure_valid(slug)?;
        self.business_by_slug
            .get(slug)
            .map(|&i| &self.businesses[i])
            .ok_or_else(|| LookupError::not_found(EntityKind::Business, slug))
    }

    pub fn category(&self, slug: &str) -> Result<&'a Category, LookupError> {
        ensure_valid(slug)?;
        self.category_by_slug
            .get(slug)
            .map(|&i| &self.categories[i])
            .ok_or_else(|| LookupError::not_found(EntityKind::Category, slug))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slug::{
        find_brand_by_slug, find_business_by_slug, find_category_by_slug, find_model_by_slug,
    };

    #[test]
    fn test_index_matches_linear_scan() {
        let table = BrandSlugTable::builtin();
        let brands = vec![
            Brand::new("b-1", "Xiaomi"),
            Brand::new("b-2", "Kugoo"),
            Brand::new("b-3", " xiaomi "),
        ];
        let models = vec![
            ScooterModel::new("m-1", "Mi Pro 2", "b-1").with_brand_name("Xiaomi"),
            ScooterModel::new("m-2", "Mi Pro 2", "b-1").with_brand_name("Xiaomi"),
            ScooterModel::new("m-3", "Mi Pro 2", "b-3").with_brand_name("xiaomi"),
            ScooterModel::new("m-4", "Mantis", "b-9").with_brand_name("Kaabo"),
            ScooterModel::new("m-5", "G30", "b-8"),
        ];
        let businesses = vec![Business::new("n-1", "Eco", "eco"), Business::new("n-2", "Eco 2", "eco")];
        let categories = vec![Category::new("c-1", "Talleres")];

        let index = SlugIndex::build(&models, &brands, &businesses, &categories, table);

        for slug in ["xiaomi", "kugoo", "kaabo", "", "Bad"] {
            assert_eq!(index.brand(slug), find_brand_by_slug(&brands, table, slug));
        }
        for (brand, model) in [
            ("xiaomi", "mi-pro-2"),
            ("xiaomi", "mi-pro-2-2"),
            ("xiaomi", "mi-pro-2-3"),
            ("kugoo", "mi-pro-2"),
            ("kaabo", "mantis"),
            ("kaabo", "wolf"),
            ("segway", "g30"),
            ("xiaomi", "Mi"),
        ] {
            assert_eq!(
                index.model(brand, model),
                find_model_by_slug(&models, &brands, table, brand, model),
                "{}/{}",
                brand,
                model
            );
        }
        for slug in ["eco", "eco-2", "ECO"] {
            assert_eq!(index.business(slug), find_business_by_slug(&businesses, slug));
        }
        assert_eq!(index.category("talleres"), find_category_by_slug(&categories, "talleres"));
        assert_eq!(index.business("eco").unwrap().id.as_str(), "n-1");
        // b-1 and b-3 share the "xiaomi" page, so m-3 is numbered after m-2.
        assert_eq!(index.model("xiaomi", "mi-pro-2-3").unwrap().id.as_str(), "m-3");
    }
}
