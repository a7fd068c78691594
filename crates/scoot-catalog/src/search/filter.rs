//! Filter state held by the catalog page.

use serde::{Deserialize, Serialize};

/// A yes/no/any filter. Serialized as `"yes"`, `"no"` or `""`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TriState {
    /// Unconstrained.
    #[default]
    Any,
    Yes,
    No,
}

impl TriState {
    pub fn as_str(&self) -> &'static str {
        match self {
            TriState::Any => "",
            TriState::Yes => "yes",
            TriState::No => "no",
        }
    }

    /// Parse a tri-state value. Anything other than `yes`/`no` is `Any`.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "yes" => TriState::Yes,
            "no" => TriState::No,
            _ => TriState::Any,
        }
    }

    pub fn is_set(&self) -> bool {
        *self != TriState::Any
    }

    /// Whether a resolved flag satisfies this constraint.
    ///
    /// An unknown flag (`None`) satisfies neither `Yes` nor `No`.
    pub fn accepts(&self, flag: Option<bool>) -> bool {
        match self {
            TriState::Any => true,
            TriState::Yes => flag == Some(true),
            TriState::No => flag == Some(false),
        }
    }
}

impl From<String> for TriState {
    fn from(s: String) -> Self {
        TriState::parse(&s)
    }
}

impl From<TriState> for String {
    fn from(t: TriState) -> Self {
        t.as_str().to_string()
    }
}

/// Advanced filter selections on the catalog page.
///
/// Range bounds are kept as the strings typed by the user; an empty (or
/// blank) string leaves the bound open. Categorical selections hold the
/// checked labels; an empty list leaves the dimension open.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterState {
    pub price_min: String,
    pub price_max: String,
    pub speed_min: String,
    pub speed_max: String,
    pub range_min: String,
    pub range_max: String,
    pub weight_min: String,
    pub weight_max: String,
    pub power_min: String,
    pub power_max: String,
    pub battery_capacity_min: String,
    pub battery_capacity_max: String,

    pub water_resistance: Vec<String>,
    pub brake_type: Vec<String>,
    pub suspension_type: Vec<String>,
    pub tire_type: Vec<String>,
    pub battery_type: Vec<String>,
    pub motor_type: Vec<String>,
    pub motor_location: Vec<String>,

    pub foldable: TriState,
    pub app_connected: TriState,
    pub bluetooth: TriState,
    pub gps: TriState,
    pub removable_battery: TriState,
}

impl FilterState {
    /// An empty (unconstrained) filter state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset every dimension.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// True when no dimension is constrained.
    pub fn is_empty(&self) -> bool {
        super::count_active_filters(self) == 0
    }

    /// Build a filter state from a catalog URL query string.
    ///
    /// Keys use the same camelCase names as the JSON form. Categorical
    /// keys accept comma-separated values and may repeat. Unknown keys
    /// are ignored.
    pub fn from_query_string(qs: &str) -> Self {
        let mut state = FilterState::default();
        let qs = qs.trim_start_matches('?');

        for pair in qs.split('&').filter(|p| !p.is_empty()) {
            let mut parts = pair.splitn(2, '=');
            let key = parts.next().unwrap_or("");
            let value = percent_decode(parts.next().unwrap_or(""));

            if let Some(bound) = state.bound_mut(key) {
                *bound = value;
            } else if let Some(selection) = state.selection_mut(key) {
                selection.extend(
                    value
                        .split(',')
                        .map(str::trim)
                        .filter(|v| !v.is_empty())
                        .map(str::to_string),
                );
            } else if let Some(flag) = state.flag_mut(key) {
                *flag = TriState::parse(&value);
            }
        }

        state
    }

    fn bound_mut(&mut self, key: &str) -> Option<&mut String> {
        Some(match key {
            "priceMin" => &mut self.price_min,
            "priceMax" => &mut self.price_max,
            "speedMin" => &mut self.speed_min,
            "speedMax" => &mut self.speed_max,
            "rangeMin" => &mut self.range_min,
            "rangeMax" => &mut self.range_max,
            "weightMin" => &mut self.weight_min,
            "weightMax" => &mut self.weight_max,
            "powerMin" => &mut self.power_min,
            "powerMax" => &mut self.power_max,
            "batteryCapacityMin" => &mut self.battery_capacity_min,
            "batteryCapacityMax" => &mut self.battery_capacity_max,
            _ => return None,
        })
    }

    fn selection_mut(&mut self, key: &str) -> Option<&mut Vec<String>> {
        Some(match key {
            "waterResistance" => &mut self.water_resistance,
            "brakeType" => &mut self.brake_type,
            "suspensionType" => &mut self.suspension_type,
            "tireType" => &mut self.tire_type,
            "batteryType" => &mut self.battery_type,
            "motorType" => &mut self.motor_type,
            "motorLocation" => &mut self.motor_location,
            _ => return None,
        })
    }

    fn flag_mut(&mut self, key: &str) -> Option<&mut TriState> {
        Some(match key {
            "foldable" => &mut self.foldable,
            "appConnected" => &mut self.app_connected,
            "bluetooth" => &mut self.bluetooth,
            "gps" => &mut self.gps,
            "removableBattery" => &mut self.removable_battery,
            _ => return None,
        })
    }
}

/// Treat blank bound strings as unset.
pub(crate) fn populated(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

fn percent_decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'%' if i + 2 < bytes.len()
                && bytes[i + 1].is_ascii_hexdigit()
                && bytes[i + 2].is_ascii_hexdigit() =>
            {
                out.push(hex_value(bytes[i + 1]) << 4 | hex_value(bytes[i + 2]));
                i += 3;
            }
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }

    String::from_utf8_lossy(&out).into_owned()
}

fn hex_value(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        b'a'..=b'f' => digit - b'a' + 10,
        _ => digit - b'A' + 10,
    }
}
