//! Nested technical specification groups.
//!
//! Specifications are stored as one JSON document per model. Every group
//! and every field is optional: data entry is partial for most models and
//! filters treat a missing value as "does not match".

use serde::{Deserialize, Serialize};

/// Full technical sheet of a scooter model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Specifications {
    #[serde(rename = "bateria", skip_serializing_if = "Option::is_none")]
    pub battery: Option<BatterySpecs>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub motor: Option<MotorSpecs>,
    #[serde(rename = "rendimiento", skip_serializing_if = "Option::is_none")]
    pub performance: Option<PerformanceSpecs>,
    #[serde(rename = "dimensiones", skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<DimensionSpecs>,
    #[serde(rename = "neumaticos", skip_serializing_if = "Option::is_none")]
    pub tires: Option<TireSpecs>,
    #[serde(rename = "frenos", skip_serializing_if = "Option::is_none")]
    pub brakes: Option<BrakeSpecs>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suspension: Option<SuspensionSpecs>,
    #[serde(rename = "seguridad", skip_serializing_if = "Option::is_none")]
    pub safety: Option<SafetySpecs>,
    #[serde(rename = "pantalla", skip_serializing_if = "Option::is_none")]
    pub display: Option<DisplaySpecs>,
    #[serde(rename = "conectividad", skip_serializing_if = "Option::is_none")]
    pub connectivity: Option<ConnectivitySpecs>,
    #[serde(rename = "modos_conduccion", skip_serializing_if = "Option::is_none")]
    pub drive_modes: Option<DriveModeSpecs>,
    #[serde(rename = "caracteristicas_adicionales", skip_serializing_if = "Option::is_none")]
    pub extras: Option<ExtraSpecs>,
}

/// Battery pack.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatterySpecs {
    /// Nominal voltage as printed, e.g. "36V".
    #[serde(rename = "voltaje", skip_serializing_if = "Option::is_none")]
    pub voltage: Option<String>,
    /// Capacity as printed, e.g. "15Ah".
    #[serde(rename = "capacidad", skip_serializing_if = "Option::is_none")]
    pub capacity: Option<String>,
    #[serde(rename = "capacidad_wh", skip_serializing_if = "Option::is_none")]
    pub capacity_wh: Option<f64>,
    /// Chemistry, e.g. "Litio-ion".
    #[serde(rename = "tipo", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(rename = "tiempo_carga", skip_serializing_if = "Option::is_none")]
    pub charge_time: Option<String>,
    #[serde(rename = "cargador", skip_serializing_if = "Option::is_none")]
    pub charger: Option<String>,
    #[serde(rename = "removible", skip_serializing_if = "Option::is_none")]
    pub removable: Option<bool>,
}

/// Motor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotorSpecs {
    /// Rated power in watts.
    #[serde(rename = "potencia", skip_serializing_if = "Option::is_none")]
    pub power_w: Option<f64>,
    #[serde(rename = "potencia_maxima", skip_serializing_if = "Option::is_none")]
    pub peak_power_w: Option<f64>,
    /// e.g. "Brushless".
    #[serde(rename = "tipo", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// e.g. "Rueda trasera".
    #[serde(rename = "ubicacion", skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(rename = "traccion", skip_serializing_if = "Option::is_none")]
    pub drivetrain: Option<String>,
}

/// Speed, range and load figures.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerformanceSpecs {
    /// Rated top speed in km/h.
    #[serde(rename = "velocidad_maxima", skip_serializing_if = "Option::is_none")]
    pub max_speed: Option<f64>,
    #[serde(rename = "velocidad_maxima_real", skip_serializing_if = "Option::is_none")]
    pub real_max_speed: Option<f64>,
    /// Rated range in km.
    #[serde(rename = "autonomia", skip_serializing_if = "Option::is_none")]
    pub range_km: Option<f64>,
    #[serde(rename = "autonomia_real", skip_serializing_if = "Option::is_none")]
    pub real_range_km: Option<f64>,
    #[serde(rename = "carga_maxima", skip_serializing_if = "Option::is_none")]
    pub max_load_kg: Option<f64>,
    #[serde(rename = "pendiente_maxima", skip_serializing_if = "Option::is_none")]
    pub climb_degrees: Option<f64>,
    #[serde(rename = "pendiente_porcentaje", skip_serializing_if = "Option::is_none")]
    pub climb_percent: Option<f64>,
    #[serde(rename = "aceleracion", skip_serializing_if = "Option::is_none")]
    pub acceleration: Option<String>,
}

/// Size and weight.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DimensionSpecs {
    /// e.g. "108 x 43 x 114 cm".
    #[serde(rename = "desplegado", skip_serializing_if = "Option::is_none")]
    pub unfolded: Option<String>,
    #[serde(rename = "plegado", skip_serializing_if = "Option::is_none")]
    pub folded: Option<String>,
    #[serde(rename = "peso", skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
    #[serde(rename = "peso_neto", skip_serializing_if = "Option::is_none")]
    pub net_weight_kg: Option<f64>,
    #[serde(rename = "peso_bruto", skip_serializing_if = "Option::is_none")]
    pub gross_weight_kg: Option<f64>,
    #[serde(rename = "altura_plataforma", skip_serializing_if = "Option::is_none")]
    pub deck_height_cm: Option<f64>,
    #[serde(rename = "ancho_plataforma", skip_serializing_if = "Option::is_none")]
    pub deck_width_cm: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TireSpecs {
    /// e.g. "Neumático", "Sólido", "Tubeless".
    #[serde(rename = "tipo", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(rename = "tamano", skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(rename = "delantero", skip_serializing_if = "Option::is_none")]
    pub front: Option<String>,
    #[serde(rename = "trasero", skip_serializing_if = "Option::is_none")]
    pub rear: Option<String>,
}

/// Brakes are described by an overall system plus per-wheel text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrakeSpecs {
    #[serde(rename = "sistema", skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
    #[serde(rename = "delantero", skip_serializing_if = "Option::is_none")]
    pub front: Option<String>,
    #[serde(rename = "trasero", skip_serializing_if = "Option::is_none")]
    pub rear: Option<String>,
    #[serde(rename = "regenerativo", skip_serializing_if = "Option::is_none")]
    pub regenerative: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuspensionSpecs {
    #[serde(rename = "sistema", skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
    #[serde(rename = "delantera", skip_serializing_if = "Option::is_none")]
    pub front: Option<String>,
    #[serde(rename = "trasera", skip_serializing_if = "Option::is_none")]
    pub rear: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SafetySpecs {
    /// Ingress protection rating, e.g. "IP54".
    #[serde(rename = "resistencia_agua", skip_serializing_if = "Option::is_none")]
    pub water_resistance: Option<String>,
    #[serde(rename = "luces", skip_serializing_if = "Option::is_none")]
    pub lights: Option<String>,
    #[serde(rename = "certificaciones", skip_serializing_if = "Vec::is_empty")]
    pub certifications: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySpecs {
    #[serde(rename = "tipo", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(rename = "tamano", skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(rename = "informacion", skip_serializing_if = "Vec::is_empty")]
    pub shows: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectivitySpecs {
    /// Companion app name. Present and non-empty means the model has an app.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bluetooth: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gps: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wifi: Option<bool>,
    #[serde(rename = "puertos", skip_serializing_if = "Vec::is_empty")]
    pub ports: Vec<String>,
}

impl ConnectivitySpecs {
    /// Whether a companion app is declared.
    ///
    /// `None` when the field is missing altogether, so callers can tell
    /// "no app" from "unknown".
    pub fn has_app(&self) -> Option<bool> {
        self.app.as_ref().map(|name| !name.trim().is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriveModeSpecs {
    /// e.g. ["Eco", "Normal", "Sport"].
    #[serde(rename = "modos", skip_serializing_if = "Vec::is_empty")]
    pub modes: Vec<String>,
    #[serde(rename = "control_crucero", skip_serializing_if = "Option::is_none")]
    pub cruise_control: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtraSpecs {
    #[serde(rename = "plegable", skip_serializing_if = "Option::is_none")]
    pub foldable: Option<bool>,
    #[serde(rename = "colores", skip_serializing_if = "Vec::is_empty")]
    pub colors: Vec<String>,
    #[serde(rename = "accesorios", skip_serializing_if = "Vec::is_empty")]
    pub accessories: Vec<String>,
    #[serde(rename = "garantia", skip_serializing_if = "Option::is_none")]
    pub warranty: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_document_deserializes() {
        let json = r#"{
            "frenos": { "sistema": "Freno de Disco Dual" },
            "caracteristicas_adicionales": { "colores": ["Negro"] }
        }"#;
        let specs: Specifications = serde_json::from_str(json).unwrap();

        let brakes = specs.brakes.unwrap();
        assert_eq!(brakes.system.as_deref(), Some("Freno de Disco Dual"));
        assert!(brakes.front.is_none());
        assert!(specs.battery.is_none());
        assert_eq!(specs.extras.unwrap().foldable, None);
    }

    #[test]
    fn test_has_app() {
        let mut conn = ConnectivitySpecs::default();
        assert_eq!(conn.has_app(), None);

        conn.app = Some("Mi Home".to_string());
        assert_eq!(conn.has_app(), Some(true));

        conn.app = Some("  ".to_string());
        assert_eq!(conn.has_app(), Some(false));
    }
}
