//! Catalog records.
//!
//! Contains the shapes of models, brands, businesses, and categories as
//! they come back from the hosted database.

mod brand;
mod business;
mod category;
mod model;
mod specs;

pub use brand::Brand;
pub use business::Business;
pub use category::Category;
pub use model::{BrandRef, ScooterModel};
pub use specs::{
    BatterySpecs, BrakeSpecs, ConnectivitySpecs, DimensionSpecs, DisplaySpecs, DriveModeSpecs,
    ExtraSpecs, MotorSpecs, PerformanceSpecs, SafetySpecs, Specifications, SuspensionSpecs,
    TireSpecs,
};
