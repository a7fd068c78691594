//! Per-dimension field resolution.
//!
//! Each filter dimension reads its value through an ordered list of
//! accessors. The first accessor returning a value wins; legacy top-level
//! columns come before the nested specification document. Values from
//! different accessors are never combined.

use crate::catalog::{ScooterModel, Specifications};

use super::{FilterState, TriState};

/// Reads one numeric value from a model.
pub type NumberAccessor = fn(&ScooterModel) -> Option<f64>;

/// Reads one flag from a model.
pub type FlagAccessor = fn(&ScooterModel) -> Option<bool>;

fn specs(model: &ScooterModel) -> Option<&Specifications> {
    model.specs.as_ref()
}

const PRICE: &[NumberAccessor] = &[|m| m.price_min, |m| m.price_max];
const SPEED: &[NumberAccessor] = &[
    |m| m.max_speed,
    |m| specs(m)?.performance.as_ref()?.max_speed,
];
const RANGE: &[NumberAccessor] = &[
    |m| m.range_km,
    |m| specs(m)?.performance.as_ref()?.range_km,
];
const WEIGHT: &[NumberAccessor] = &[
    |m| m.weight_kg,
    |m| specs(m)?.dimensions.as_ref()?.weight_kg,
];
const POWER: &[NumberAccessor] = &[
    |m| m.motor_power_w,
    |m| specs(m)?.motor.as_ref()?.power_w,
];
const BATTERY_CAPACITY: &[NumberAccessor] = &[|m| specs(m)?.battery.as_ref()?.capacity_wh];

/// Numeric range dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeDimension {
    Price,
    Speed,
    Range,
    Weight,
    Power,
    BatteryCapacity,
}

impl RangeDimension {
    pub const ALL: [RangeDimension; 6] = [
        RangeDimension::Price,
        RangeDimension::Speed,
        RangeDimension::Range,
        RangeDimension::Weight,
        RangeDimension::Power,
        RangeDimension::BatteryCapacity,
    ];

    /// Accessors in precedence order.
    pub fn accessors(self) -> &'static [NumberAccessor] {
        match self {
            RangeDimension::Price => PRICE,
            RangeDimension::Speed => SPEED,
            RangeDimension::Range => RANGE,
            RangeDimension::Weight => WEIGHT,
            RangeDimension::Power => POWER,
            RangeDimension::BatteryCapacity => BATTERY_CAPACITY,
        }
    }

    /// First non-null value along the accessor chain.
    pub fn resolve(self, model: &ScooterModel) -> Option<f64> {
        self.accessors().iter().find_map(|read| read(model))
    }

    /// `(min, max)` bound strings for this dimension.
    pub fn bounds(self, filters: &FilterState) -> (&str, &str) {
        match self {
            RangeDimension::Price => (&filters.price_min, &filters.price_max),
            RangeDimension::Speed => (&filters.speed_min, &filters.speed_max),
            RangeDimension::Range => (&filters.range_min, &filters.range_max),
            RangeDimension::Weight => (&filters.weight_min, &filters.weight_max),
            RangeDimension::Power => (&filters.power_min, &filters.power_max),
            RangeDimension::BatteryCapacity => {
                (&filters.battery_capacity_min, &filters.battery_capacity_max)
            }
        }
    }
}

/// Multi-select text dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoricalDimension {
    WaterResistance,
    BrakeType,
    SuspensionType,
    TireType,
    BatteryType,
    MotorType,
    MotorLocation,
}

impl CategoricalDimension {
    pub const ALL: [CategoricalDimension; 7] = [
        CategoricalDimension::WaterResistance,
        CategoricalDimension::BrakeType,
        CategoricalDimension::SuspensionType,
        CategoricalDimension::TireType,
        CategoricalDimension::BatteryType,
        CategoricalDimension::MotorType,
        CategoricalDimension::MotorLocation,
    ];

    /// Text the selected labels are searched in.
    ///
    /// Brakes and suspension join their system, front and rear
    /// descriptions with spaces.
    pub fn text(self, model: &ScooterModel) -> Option<String> {
        let specs = specs(model)?;
        match self {
            CategoricalDimension::WaterResistance => specs.safety.as_ref()?.water_resistance.clone(),
            CategoricalDimension::BrakeType => {
                let brakes = specs.brakes.as_ref()?;
                join_present(&[&brakes.system, &brakes.front, &brakes.rear])
            }
            CategoricalDimension::SuspensionType => {
                let suspension = specs.suspension.as_ref()?;
                join_present(&[&suspension.system, &suspension.front, &suspension.rear])
            }
            CategoricalDimension::TireType => specs.tires.as_ref()?.kind.clone(),
            CategoricalDimension::BatteryType => specs.battery.as_ref()?.kind.clone(),
            CategoricalDimension::MotorType => specs.motor.as_ref()?.kind.clone(),
            CategoricalDimension::MotorLocation => specs.motor.as_ref()?.location.clone(),
        }
    }

    pub fn selection(self, filters: &FilterState) -> &[String] {
        match self {
            CategoricalDimension::WaterResistance => &filters.water_resistance,
            CategoricalDimension::BrakeType => &filters.brake_type,
            CategoricalDimension::SuspensionType => &filters.suspension_type,
            CategoricalDimension::TireType => &filters.tire_type,
            CategoricalDimension::BatteryType => &filters.battery_type,
            CategoricalDimension::MotorType => &filters.motor_type,
            CategoricalDimension::MotorLocation => &filters.motor_location,
        }
    }
}

fn join_present(parts: &[&Option<String>]) -> Option<String> {
    let present: Vec<&str> = parts.iter().filter_map(|p| p.as_deref()).collect();
    (!present.is_empty()).then(|| present.join(" "))
}

/// Tri-state boolean dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlagDimension {
    Foldable,
    AppConnected,
    Bluetooth,
    Gps,
    RemovableBattery,
}

impl FlagDimension {
    pub const ALL: [FlagDimension; 5] = [
        FlagDimension::Foldable,
        FlagDimension::AppConnected,
        FlagDimension::Bluetooth,
        FlagDimension::Gps,
        FlagDimension::RemovableBattery,
    ];

    fn accessor(self) -> FlagAccessor {
        match self {
            FlagDimension::Foldable => |m| specs(m)?.extras.as_ref()?.foldable,
            FlagDimension::AppConnected => |m| specs(m)?.connectivity.as_ref()?.has_app(),
            FlagDimension::Bluetooth => |m| specs(m)?.connectivity.as_ref()?.bluetooth,
            FlagDimension::Gps => |m| specs(m)?.connectivity.as_ref()?.gps,
            FlagDimension::RemovableBattery => |m| specs(m)?.battery.as_ref()?.removable,
        }
    }

    /// The model's flag, `None` when unknown.
    pub fn resolve(self, model: &ScooterModel) -> Option<bool> {
        (self.accessor())(model)
    }

    pub fn state(self, filters: &FilterState) -> TriState {
        match self {
            FlagDimension::Foldable => filters.foldable,
            FlagDimension::AppConnected => filters.app_connected,
            FlagDimension::Bluetooth => filters.bluetooth,
            FlagDimension::Gps => filters.gps,
            FlagDimension::RemovableBattery => filters.removable_battery,
        }
    }
}
