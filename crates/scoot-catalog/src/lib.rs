//! Catalog core for the Colombian electric scooter directory.
//!
//! This crate holds the logic the catalog pages run in memory:
//!
//! - **Catalog**: Model, brand, business, and category records
//! - **Slug**: Slug generation, brand slug overrides, per-brand model slug
//!   disambiguation, and slug → record resolution
//! - **Search**: Advanced filters, active-filter badge count, summary chips,
//!   and sort orders
//!
//! Nothing here performs I/O. Records are fetched elsewhere and passed in.
//!
//! # Example
//!
//! ```rust
//! use scoot_catalog::prelude::*;
//!
//! let mut model = ScooterModel::new("m-1", "Mi Pro 2", "b-1").with_brand_name("Xiaomi");
//! model.max_speed = Some(25.0);
//! let models = vec![model];
//!
//! let filters = FilterState::from_query_string("speedMin=20");
//! let visible = apply_advanced_filters(&models, &filters);
//! assert_eq!(visible.len(), 1);
//! assert_eq!(count_active_filters(&filters), 1);
//!
//! let brands = vec![Brand::new("b-1", "Xiaomi")];
//! let table = BrandSlugTable::builtin();
//! let slug = unique_model_slug(&visible[0], &models, &brands, table);
//! assert_eq!(model_path(&brand_slug("Xiaomi"), &slug), "/marcas/xiaomi/mi-pro-2");
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod catalog;
pub mod search;
pub mod slug;

pub use error::{EntityKind, LookupError};
pub use ids::*;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::{EntityKind, LookupError};
    pub use crate::ids::*;

    // Catalog
    pub use crate::catalog::{Brand, BrandRef, Business, Category, ScooterModel, Specifications};

    // Slug
    pub use crate::slug::{
        brand_slug, generate_slug, is_valid_slug, model_path, slug_to_title, unique_model_slug,
        BrandSlugTable, SlugIndex,
    };

    // Search
    pub use crate::search::{
        apply_advanced_filters, count_active_filters, filter_summary, sort_models, FilterState,
        SortOption, TriState,
    };
}
