//! Catalog record sources for the scooter directory.
//!
//! The catalog core works on in-memory collections. This crate fetches
//! them: from a JSON export of the hosted database ([`JsonCatalog`]) or,
//! when that fails, from built-in sample data ([`MockCatalog`]).
//!
//! # Example
//!
//! ```rust,no_run
//! use scoot_data::{Catalog, JsonCatalog};
//!
//! let catalog = Catalog::load_or_mock(&JsonCatalog::new("catalog.json"));
//! let brand = catalog.brand_by_slug("xiaomi")?;
//! println!("{} models", catalog.models_for_brand("xiaomi")?.len());
//! # let _ = brand;
//! # Ok::<(), scoot_data::DataError>(())
//! ```

mod catalog;
mod error;
mod json;
mod mock;
mod source;

pub use catalog::{Catalog, CatalogOrigin};
pub use error::DataError;
pub use json::JsonCatalog;
pub use mock::MockCatalog;
pub use source::{CatalogSnapshot, CatalogSource};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Catalog, CatalogSnapshot, CatalogSource, DataError, JsonCatalog, MockCatalog};
}
