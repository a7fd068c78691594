//! Slug resolution.
//!
//! Slugs are derived from display names, never stored as the source of
//! truth (businesses excepted). This module generates them, validates
//! URL input, pins well-known brand slugs, disambiguates model slugs per
//! brand and resolves slugs back to records.

mod brand_table;
mod generate;
mod index;
mod lookup;
mod paths;
mod unique;

pub use brand_table::{brand_slug, BrandSlugTable};
pub use generate::{category_slug, city_slug, generate_slug, is_valid_slug, slug_to_title};
pub use index::SlugIndex;
pub use lookup::{
    businesses_in_city, find_brand_by_slug, find_business_by_slug, find_category_by_slug,
    find_model_by_slug, models_for_brand,
};
pub use paths::{brand_path, business_path, category_path, city_path, model_path};
pub use unique::{
    model_base_slug, model_brand_slug, model_paths, model_slugs, unique_model_slug, ScopedSlugger,
};
