//! Slug → record resolution by linear scan.
//!
//! Collections are small (hundreds of rows), so every lookup regenerates
//! slugs over the whole collection. [`SlugIndex`](super::SlugIndex) gives
//! the same answers from a precomputed map.

use crate::catalog::{Brand, Business, Category, ScooterModel};
use crate::error::{EntityKind, LookupError};

use super::unique::{routed_slugs, BrandRoutes};
use super::{is_valid_slug, BrandSlugTable};

pub(crate) fn ensure_valid(slug: &str) -> Result<(), LookupError> {
    if is_valid_slug(slug) {
        Ok(())
    } else {
        Err(LookupError::InvalidSlug(slug.to_string()))
    }
}

/// Find a business by its stored slug (exact match, no regeneration).
pub fn find_business_by_slug<'a>(
    businesses: &'a [Business],
    slug: &str,
) -> Result<&'a Business, LookupError> {
    ensure_valid(slug)?;
    businesses
        .iter()
        .find(|b| b.slug == slug)
        .ok_or_else(|| LookupError::not_found(EntityKind::Business, slug))
}

/// Find a category by its route slug.
pub fn find_category_by_slug<'a>(
    categories: &'a [Category],
    slug: &str,
) -> Result<&'a Category, LookupError> {
    ensure_valid(slug)?;
    categories
        .iter()
        .find(|c| c.route_slug() == slug)
        .ok_or_else(|| LookupError::not_found(EntityKind::Category, slug))
}

/// Find a brand by regenerating brand slugs from names.
pub fn find_brand_by_slug<'a>(
    brands: &'a [Brand],
    table: &BrandSlugTable,
    slug: &str,
) -> Result<&'a Brand, LookupError> {
    ensure_valid(slug)?;
    brands
        .iter()
        .find(|b| table.brand_slug(&b.name) == slug)
        .ok_or_else(|| LookupError::not_found(EntityKind::Brand, slug))
}

/// Find a model from its `/marcas/{brand}/{model}` slugs.
///
/// Models are grouped by the brand slug their page lives under: the slug
/// of their brand row, or of their denormalized brand name when the row is
/// missing (the brand list failed to load, or the row was renamed). Brand
/// rows whose names slugify alike therefore share one group.
pub fn find_model_by_slug<'a>(
    models: &'a [ScooterModel],
    brands: &[Brand],
    table: &BrandSlugTable,
    brand_slug: &str,
    model_slug: &str,
) -> Result<&'a ScooterModel, LookupError> {
    ensure_valid(brand_slug)?;
    ensure_valid(model_slug)?;

    let routes = BrandRoutes::new(brands, table);
    let slugs = routed_slugs(models, &routes);

    let mut brand_seen = find_brand_by_slug(brands, table, brand_slug).is_ok();
    for model in models {
        if routes.brand_slug(model).as_deref() != Some(brand_slug) {
            continue;
        }
        brand_seen = true;
        if slugs.get(&model.id).map(String::as_str) == Some(model_slug) {
            return Ok(model);
        }
    }

    if brand_seen {
        Err(LookupError::not_found(EntityKind::Model, model_slug))
    } else {
        Err(LookupError::not_found(EntityKind::Brand, brand_slug))
    }
}

/// Models listed on the page of the brand with `brand_slug`.
pub fn models_for_brand<'a>(
    models: &'a [ScooterModel],
    brands: &[Brand],
    table: &BrandSlugTable,
    brand_slug: &str,
) -> Result<Vec<&'a ScooterModel>, LookupError> {
    find_brand_by_slug(brands, table, brand_slug)?;
    let routes = BrandRoutes::new(brands, table);
    Ok(models
        .iter()
        .filter(|m| routes.brand_slug(m).as_deref() == Some(brand_slug))
        .collect())
}

/// Businesses located in the city with `city_slug`.
pub fn businesses_in_city<'a>(
    businesses: &'a [Business],
    city_slug: &str,
) -> Result<Vec<&'a Business>, LookupError> {
    ensure_valid(city_slug)?;
    Ok(businesses
        .iter()
        .filter(|b| b.city_slug().as_deref() == Some(city_slug))
        .collect())
}
