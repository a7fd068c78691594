//! Active-filter badge count and summary chips.

use crate::money::format_price_bound;

use super::fields::{CategoricalDimension, FlagDimension, RangeDimension};
use super::filter::populated;
use super::{FilterState, TriState};

/// Number shown on the "N filtros activos" badge.
///
/// Counts every populated bound (a dimension with both bounds counts 2),
/// every selected label, and every flag that is not `Any`.
pub fn count_active_filters(filters: &FilterState) -> usize {
    let bounds: usize = RangeDimension::ALL
        .iter()
        .map(|dim| {
            let (min, max) = dim.bounds(filters);
            usize::from(populated(min).is_some()) + usize::from(populated(max).is_some())
        })
        .sum();
    let labels: usize = CategoricalDimension::ALL
        .iter()
        .map(|dim| dim.selection(filters).len())
        .sum();
    let flags = FlagDimension::ALL
        .iter()
        .filter(|dim| dim.state(filters).is_set())
        .count();

    bounds + labels + flags
}

/// Removable chips describing the coarse active filters, in display order.
///
/// Only price, speed, range, water resistance and the `yes` side of the
/// foldable/app/bluetooth/GPS flags produce chips. A flag set to `no` is
/// counted by [`count_active_filters`] but gets no chip.
pub fn filter_summary(filters: &FilterState) -> Vec<String> {
    let mut chips = Vec::new();

    if let Some((min, max)) = open_range(&filters.price_min, &filters.price_max) {
        chips.push(format!(
            "Precio: {} - {}",
            min.map(format_price_bound).unwrap_or_else(|| "$0".to_string()),
            max.map(format_price_bound).unwrap_or_else(|| "$∞".to_string()),
        ));
    }
    if let Some((min, max)) = open_range(&filters.speed_min, &filters.speed_max) {
        chips.push(format!(
            "Velocidad: {} - {} km/h",
            min.unwrap_or("0"),
            max.unwrap_or("∞")
        ));
    }
    if let Some((min, max)) = open_range(&filters.range_min, &filters.range_max) {
        chips.push(format!(
            "Autonomía: {} - {} km",
            min.unwrap_or("0"),
            max.unwrap_or("∞")
        ));
    }
    if !filters.water_resistance.is_empty() {
        chips.push(format!(
            "Resistencia al agua: {}",
            filters.water_resistance.join(", ")
        ));
    }

    let flag_chips = [
        (filters.foldable, "Plegable"),
        (filters.app_connected, "Con app"),
        (filters.bluetooth, "Bluetooth"),
        (filters.gps, "GPS"),
    ];
    for (state, label) in flag_chips {
        if state == TriState::Yes {
            chips.push(label.to_string());
        }
    }

    chips
}

/// `Some` when at least one bound is populated.
fn open_range<'a>(min: &'a str, max: &'a str) -> Option<(Option<&'a str>, Option<&'a str>)> {
    let (min, max) = (populated(min), populated(max));
    (min.is_some() || max.is_some()).then_some((min, max))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_bounds_individually() {
        let filters = FilterState {
            price_min: "1000000".to_string(),
            price_max: "3000000".to_string(),
            speed_min: "25".to_string(),
            ..Default::default()
        };
        assert_eq!(count_active_filters(&filters), 3);
    }

    #[test]
    fn test_count_selection_cardinality() {
        let filters = FilterState {
            brake_type: vec!["Disco".into(), "Tambor".into(), "Regenerativo".into()],
            motor_location: vec!["Trasero".into()],
            ..Default::default()
        };
        assert_eq!(count_active_filters(&filters), 4);
    }

    #[test]
    fn test_count_and_chips_disagree_on_no() {
        let filters = FilterState {
            foldable: TriState::No,
            bluetooth: TriState::Yes,
            ..Default::default()
        };
        assert_eq!(count_active_filters(&filters), 2);
        assert_eq!(filter_summary(&filters), vec!["Bluetooth"]);
    }

    #[test]
    fn test_empty_state() {
        assert_eq!(count_active_filters(&FilterState::default()), 0);
        assert!(filter_summary(&FilterState::default()).is_empty());
    }

    #[test]
    fn test_summary_order_and_format() {
        let filters = FilterState {
            gps: TriState::Yes,
            water_resistance: vec!["IP54".into(), "IP67".into()],
            range_max: "40".to_string(),
            speed_min: "20".to_string(),
            price_min: "1200000".to_string(),
            foldable: TriState::Yes,
            removable_battery: TriState::Yes,
            brake_type: vec!["Disco".into()],
            ..Default::default()
        };
        assert_eq!(
            filter_summary(&filters),
            vec![
                "Precio: $1.200.000 - $∞",
                "Velocidad: 20 - ∞ km/h",
                "Autonomía: 0 - 40 km",
                "Resistencia al agua: IP54, IP67",
                "Plegable",
                "GPS",
            ]
        );
    }

    #[test]
    fn test_price_chip_open_low_end() {
        let filters = FilterState {
            price_max: "2500000".to_string(),
            ..Default::default()
        };
        assert_eq!(filter_summary(&filters), vec!["Precio: $0 - $2.500.000"]);
    }
}
