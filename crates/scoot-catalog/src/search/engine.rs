//! Advanced filter evaluation.

use crate::catalog::ScooterModel;

use super::fields::{CategoricalDimension, FlagDimension, RangeDimension};
use super::filter::populated;
use super::FilterState;

/// Narrow `models` to the ones satisfying every populated dimension.
///
/// Dimensions are ANDed. The input order is kept and the input slice is
/// left untouched.
pub fn apply_advanced_filters(models: &[ScooterModel], filters: &FilterState) -> Vec<ScooterModel> {
    models
        .iter()
        .filter(|model| matches_filters(model, filters))
        .cloned()
        .collect()
}

/// Borrowing variant of [`apply_advanced_filters`].
pub fn filter_models<'a>(models: &'a [ScooterModel], filters: &FilterState) -> Vec<&'a ScooterModel> {
    models
        .iter()
        .filter(|model| matches_filters(model, filters))
        .collect()
}

/// Whether one model passes every populated dimension of `filters`.
pub fn matches_filters(model: &ScooterModel, filters: &FilterState) -> bool {
    RangeDimension::ALL
        .iter()
        .all(|&dim| within_range(dim.resolve(model), dim.bounds(filters)))
        && CategoricalDimension::ALL
            .iter()
            .all(|&dim| contains_any(dim.text(model), dim.selection(filters)))
        && FlagDimension::ALL
            .iter()
            .all(|&dim| dim.state(filters).accepts(dim.resolve(model)))
}

/// A populated bound rejects a missing value. A bound that does not parse
/// as a number only rejects missing values.
fn within_range(value: Option<f64>, (min, max): (&str, &str)) -> bool {
    if let Some(min) = populated(min) {
        let Some(value) = value else {
            return false;
        };
        if min.parse::<f64>().is_ok_and(|min| value < min) {
            return false;
        }
    }
    if let Some(max) = populated(max) {
        let Some(value) = value else {
            return false;
        };
        if max.parse::<f64>().is_ok_and(|max| value > max) {
            return false;
        }
    }
    true
}

/// Case-insensitive substring match of any selected label.
fn contains_any(text: Option<String>, selected: &[String]) -> bool {
    if selected.is_empty() {
        return true;
    }
    let Some(text) = text else {
        return false;
    };
    let haystack = text.to_lowercase();
    selected
        .iter()
        .any(|label| haystack.contains(&label.to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{
        BatterySpecs, BrakeSpecs, ConnectivitySpecs, ExtraSpecs, MotorSpecs, PerformanceSpecs,
        SafetySpecs, Specifications, SuspensionSpecs,
    };
    use crate::search::TriState;

    fn model(id: &str) -> ScooterModel {
        ScooterModel::new(id, id, "b-1")
    }

    fn ids(models: &[ScooterModel]) -> Vec<&str> {
        models.iter().map(|m| m.id.as_str()).collect()
    }

    #[test]
    fn test_missing_value_fails_speed_bounds() {
        let mut fast = model("fast");
        fast.max_speed = Some(30.0);
        let unknown = model("unknown");
        let models = vec![fast, unknown];

        let filters = FilterState {
            speed_min: "20".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&apply_advanced_filters(&models, &filters)), vec!["fast"]);

        let filters = FilterState {
            speed_min: "40".to_string(),
            ..Default::default()
        };
        assert!(apply_advanced_filters(&models, &filters).is_empty());

        let filters = FilterState {
            speed_max: "100".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&apply_advanced_filters(&models, &filters)), vec!["fast"]);
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let mut m = model("m");
        m.range_km = Some(40.0);
        let models = vec![m];
        let filters = FilterState {
            range_min: "40".to_string(),
            range_max: "40".to_string(),
            ..Default::default()
        };
        assert_eq!(apply_advanced_filters(&models, &filters).len(), 1);
    }

    #[test]
    fn test_legacy_speed_is_used_over_specs() {
        let mut m = model("m").with_specs(Specifications {
            performance: Some(PerformanceSpecs {
                max_speed: Some(99.0),
                ..Default::default()
            }),
            ..Default::default()
        });
        m.max_speed = Some(25.0);
        let models = vec![m];

        let filters = FilterState {
            speed_min: "50".to_string(),
            ..Default::default()
        };
        assert!(apply_advanced_filters(&models, &filters).is_empty());

        let filters = FilterState {
            speed_max: "30".to_string(),
            ..Default::default()
        };
        assert_eq!(apply_advanced_filters(&models, &filters).len(), 1);
    }

    #[test]
    fn test_nested_value_used_when_legacy_missing() {
        let m = model("m").with_specs(Specifications {
            motor: Some(MotorSpecs {
                power_w: Some(500.0),
                ..Default::default()
            }),
            battery: Some(BatterySpecs {
                capacity_wh: Some(468.0),
                ..Default::default()
            }),
            ..Default::default()
        });
        let models = vec![m];
        let filters = FilterState {
            power_min: "350".to_string(),
            battery_capacity_min: "400".to_string(),
            battery_capacity_max: "500".to_string(),
            ..Default::default()
        };
        assert_eq!(apply_advanced_filters(&models, &filters).len(), 1);
    }

    #[test]
    fn test_unparseable_bound_only_rejects_missing_values() {
        let mut known = model("known");
        known.weight_kg = Some(14.0);
        let models = vec![known, model("unknown")];
        let filters = FilterState {
            weight_max: "ligero".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&apply_advanced_filters(&models, &filters)), vec!["known"]);
    }

    #[test]
    fn test_brake_substring_match() {
        let dual = model("dual").with_specs(Specifications {
            brakes: Some(BrakeSpecs {
                system: Some("Freno de Disco Dual".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        });
        let drum = model("drum").with_specs(Specifications {
            brakes: Some(BrakeSpecs {
                front: Some("Tambor".to_string()),
                rear: Some("Electrónico".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        });
        let models = vec![dual, drum, model("none")];

        let filters = FilterState {
            brake_type: vec!["Disco".to_string()],
            ..Default::default()
        };
        assert_eq!(ids(&apply_advanced_filters(&models, &filters)), vec!["dual"]);

        let filters = FilterState {
            brake_type: vec!["disco".to_string(), "ELECTRÓNICO".to_string()],
            ..Default::default()
        };
        assert_eq!(ids(&apply_advanced_filters(&models, &filters)), vec!["dual", "drum"]);
    }

    #[test]
    fn test_suspension_and_water_resistance() {
        let m = model("m").with_specs(Specifications {
            suspension: Some(SuspensionSpecs {
                front: Some("Hidráulica".to_string()),
                ..Default::default()
            }),
            safety: Some(SafetySpecs {
                water_resistance: Some("IPX5".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        });
        let models = vec![m];

        let filters = FilterState {
            suspension_type: vec!["hidráulica".to_string()],
            water_resistance: vec!["IP54".to_string(), "IPX5".to_string()],
            ..Default::default()
        };
        assert_eq!(apply_advanced_filters(&models, &filters).len(), 1);

        let filters = FilterState {
            water_resistance: vec!["IP67".to_string()],
            ..Default::default()
        };
        assert!(apply_advanced_filters(&models, &filters).is_empty());
    }

    #[test]
    fn test_absent_flag_fails_yes_and_no() {
        let folding = model("folding").with_specs(Specifications {
            extras: Some(ExtraSpecs {
                foldable: Some(true),
                ..Default::default()
            }),
            ..Default::default()
        });
        let rigid = model("rigid").with_specs(Specifications {
            extras: Some(ExtraSpecs {
                foldable: Some(false),
                ..Default::default()
            }),
            ..Default::default()
        });
        let unknown = model("unknown").with_specs(Specifications {
            extras: Some(ExtraSpecs::default()),
            ..Default::default()
        });
        let models = vec![folding, rigid, unknown];

        let yes = FilterState {
            foldable: TriState::Yes,
            ..Default::default()
        };
        assert_eq!(ids(&apply_advanced_filters(&models, &yes)), vec!["folding"]);

        let no = FilterState {
            foldable: TriState::No,
            ..Default::default()
        };
        assert_eq!(ids(&apply_advanced_filters(&models, &no)), vec!["rigid"]);
    }

    #[test]
    fn test_app_flag_reads_app_name() {
        let with_app = model("app").with_specs(Specifications {
            connectivity: Some(ConnectivitySpecs {
                app: Some("Segway-Ninebot".to_string()),
                bluetooth: Some(true),
                ..Default::default()
            }),
            ..Default::default()
        });
        let empty_app = model("empty").with_specs(Specifications {
            connectivity: Some(ConnectivitySpecs {
                app: Some(String::new()),
                ..Default::default()
            }),
            ..Default::default()
        });
        let models = vec![with_app, empty_app, model("none")];

        let yes = FilterState {
            app_connected: TriState::Yes,
            ..Default::default()
        };
        assert_eq!(ids(&apply_advanced_filters(&models, &yes)), vec!["app"]);

        let no = FilterState {
            app_connected: TriState::No,
            ..Default::default()
        };
        assert_eq!(ids(&apply_advanced_filters(&models, &no)), vec!["empty"]);

        let bt_no = FilterState {
            bluetooth: TriState::No,
            ..Default::default()
        };
        assert!(apply_advanced_filters(&models, &bt_no).is_empty());
    }

    #[test]
    fn test_empty_filters_keep_everything() {
        let mut a = model("a");
        a.max_speed = Some(25.0);
        let models = vec![a, model("b"), model("c")];
        let result = apply_advanced_filters(&models, &FilterState::default());
        assert_eq!(result, models);
    }

    #[test]
    fn test_price_scenario() {
        let mut a = ScooterModel::new("a", "A", "b-1").with_brand_name("Brand1");
        a.price_min = Some(1000000.0);
        a.price_max = Some(1500000.0);
        let mut b = ScooterModel::new("b", "B", "b-1").with_brand_name("Brand1");
        b.price_min = Some(2000000.0);
        let models = vec![a, b];

        let filters = FilterState {
            price_min: "1200000".to_string(),
            ..Default::default()
        };
        let result = apply_advanced_filters(&models, &filters);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "B");
    }

    #[test]
    fn test_dimensions_are_conjunctive() {
        let mut m = model("m").with_specs(Specifications {
            extras: Some(ExtraSpecs {
                foldable: Some(true),
                ..Default::default()
            }),
            ..Default::default()
        });
        m.max_speed = Some(25.0);
        let models = vec![m];

        let filters = FilterState {
            speed_min: "20".to_string(),
            foldable: TriState::Yes,
            gps: TriState::Yes,
            ..Default::default()
        };
        assert!(filter_models(&models, &filters).is_empty());
    }
}
