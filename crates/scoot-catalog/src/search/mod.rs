//! Advanced catalog filtering.
//!
//! Pure functions over an in-memory model list: the catalog page fetches
//! once and re-runs [`apply_advanced_filters`] on every filter change.

mod engine;
mod fields;
mod filter;
mod sort;
mod summary;

pub use engine::{apply_advanced_filters, filter_models, matches_filters};
pub use fields::{CategoricalDimension, FlagAccessor, FlagDimension, NumberAccessor, RangeDimension};
pub use filter::{FilterState, TriState};
pub use sort::{sort_models, SortOption};
pub use summary::{count_active_filters, filter_summary};
