//! Scooter model records.

use crate::catalog::Specifications;
use crate::ids::{BrandId, ModelId};
use crate::money::format_price;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Brand data denormalized onto a model row.
///
/// The database join returns `{ "id": .., "nombre": .. }`; older exports
/// carry the bare brand name as a string. Both forms deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BrandRefRepr")]
pub struct BrandRef {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<BrandId>,
    #[serde(rename = "nombre")]
    pub name: String,
}

impl BrandRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum BrandRefRepr {
    Name(String),
    Record {
        #[serde(default)]
        id: Option<BrandId>,
        #[serde(rename = "nombre")]
        name: String,
    },
}

impl From<BrandRefRepr> for BrandRef {
    fn from(repr: BrandRefRepr) -> Self {
        match repr {
            BrandRefRepr::Name(name) => BrandRef { id: None, name },
            BrandRefRepr::Record { id, name } => BrandRef { id, name },
        }
    }
}

/// A scooter model in the catalog.
///
/// The flat numeric fields predate the nested [`Specifications`] document
/// and are still populated for most rows. Filters read them first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScooterModel {
    pub id: ModelId,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "marca_id")]
    pub brand_id: BrandId,
    #[serde(rename = "marca", default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<BrandRef>,

    /// Top speed in km/h.
    #[serde(rename = "velocidad_maxima", default, skip_serializing_if = "Option::is_none")]
    pub max_speed: Option<f64>,
    /// Range in km.
    #[serde(rename = "autonomia", default, skip_serializing_if = "Option::is_none")]
    pub range_km: Option<f64>,
    #[serde(rename = "peso", default, skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
    #[serde(rename = "potencia_motor", default, skip_serializing_if = "Option::is_none")]
    pub motor_power_w: Option<f64>,
    /// Charge time in hours.
    #[serde(rename = "tiempo_carga", default, skip_serializing_if = "Option::is_none")]
    pub charge_time_h: Option<f64>,
    #[serde(rename = "precio_min", default, skip_serializing_if = "Option::is_none")]
    pub price_min: Option<f64>,
    #[serde(rename = "precio_max", default, skip_serializing_if = "Option::is_none")]
    pub price_max: Option<f64>,

    #[serde(rename = "especificaciones", default, skip_serializing_if = "Option::is_none")]
    pub specs: Option<Specifications>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl ScooterModel {
    /// Create a model with only its identity filled in.
    pub fn new(id: impl Into<ModelId>, name: impl Into<String>, brand_id: impl Into<BrandId>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            brand_id: brand_id.into(),
            brand: None,
            max_speed: None,
            range_km: None,
            weight_kg: None,
            motor_power_w: None,
            charge_time_h: None,
            price_min: None,
            price_max: None,
            specs: None,
            created_at: None,
        }
    }

    /// Attach the denormalized brand name.
    pub fn with_brand_name(mut self, name: impl Into<String>) -> Self {
        self.brand = Some(BrandRef {
            id: Some(self.brand_id.clone()),
            name: name.into(),
        });
        self
    }

    /// Attach a specification document.
    pub fn with_specs(mut self, specs: Specifications) -> Self {
        self.specs = Some(specs);
        self
    }

    /// Denormalized brand name, if the row was fetched with its brand.
    pub fn brand_name(&self) -> Option<&str> {
        self.brand.as_ref().map(|b| b.name.as_str())
    }

    /// "Desde $X" style price label.
    pub fn price_label(&self) -> Option<String> {
        match (self.price_min, self.price_max) {
            (Some(min), Some(max)) if max > min => {
                Some(format!("{} - {}", format_price(min), format_price(max)))
            }
            (Some(min), _) => Some(format_price(min)),
            (None, Some(max)) => Some(format_price(max)),
            (None, None) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_from_database_row() {
        let json = r#"{
            "id": "m-1",
            "nombre": "Mi Pro 2",
            "marca_id": "b-1",
            "marca": { "id": "b-1", "nombre": "Xiaomi" },
            "velocidad_maxima": 25,
            "precio_min": 2300000,
            "especificaciones": { "rendimiento": { "velocidad_maxima": 25 } }
        }"#;
        let model: ScooterModel = serde_json::from_str(json).unwrap();

        assert_eq!(model.name, "Mi Pro 2");
        assert_eq!(model.brand_name(), Some("Xiaomi"));
        assert_eq!(model.max_speed, Some(25.0));
        assert!(model.range_km.is_none());
        assert!(model.specs.is_some());
    }

    #[test]
    fn test_brand_as_plain_string() {
        let json = r#"{ "id": "m-2", "nombre": "A", "marca_id": "b-1", "marca": "Brand1" }"#;
        let model: ScooterModel = serde_json::from_str(json).unwrap();
        assert_eq!(model.brand, Some(BrandRef::new("Brand1")));
    }

    #[test]
    fn test_price_label() {
        let mut model = ScooterModel::new("m-1", "A", "b-1");
        assert_eq!(model.price_label(), None);

        model.price_min = Some(1000000.0);
        assert_eq!(model.price_label().as_deref(), Some("$1.000.000"));

        model.price_max = Some(1500000.0);
        assert_eq!(model.price_label().as_deref(), Some("$1.000.000 - $1.500.000"));
    }
}
