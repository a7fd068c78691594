//! Catalog sort orders.

use std::cmp::Ordering;

use crate::catalog::ScooterModel;

use super::fields::RangeDimension;

/// Sort order for the catalog grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOption {
    /// Alphabetical by model name.
    #[default]
    Name,
    PriceAsc,
    PriceDesc,
    /// Fastest first.
    Speed,
    /// Longest range first.
    Range,
    /// Most recently added first.
    Newest,
}

impl SortOption {
    pub fn from_str(s: &str) -> Self {
        match s {
            "price_asc" => Self::PriceAsc,
            "price_desc" => Self::PriceDesc,
            "speed" => Self::Speed,
            "range" => Self::Range,
            "newest" => Self::Newest,
            _ => Self::Name,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::PriceAsc => "price_asc",
            Self::PriceDesc => "price_desc",
            Self::Speed => "speed",
            Self::Range => "range",
            Self::Newest => "newest",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Name => "Nombre",
            Self::PriceAsc => "Precio: menor a mayor",
            Self::PriceDesc => "Precio: mayor a menor",
            Self::Speed => "Mayor velocidad",
            Self::Range => "Mayor autonomía",
            Self::Newest => "Más recientes",
        }
    }
}

/// Sort models in place. Models missing the sort value go last; ties keep
/// their current order.
pub fn sort_models(models: &mut [ScooterModel], sort: SortOption) {
    match sort {
        SortOption::Name => models.sort_by_key(|m| m.name.to_lowercase()),
        SortOption::PriceAsc => sort_by_value(models, RangeDimension::Price, false),
        SortOption::PriceDesc => sort_by_value(models, RangeDimension::Price, true),
        SortOption::Speed => sort_by_value(models, RangeDimension::Speed, true),
        SortOption::Range => sort_by_value(models, RangeDimension::Range, true),
        SortOption::Newest => {
            models.sort_by(|a, b| compare_present(a.created_at, b.created_at, true))
        }
    }
}

fn sort_by_value(models: &mut [ScooterModel], dim: RangeDimension, descending: bool) {
    models.sort_by(|a, b| compare_present(dim.resolve(a), dim.resolve(b), descending));
}

fn compare_present<T: PartialOrd>(a: Option<T>, b: Option<T>, descending: bool) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => {
            let ord = x.partial_cmp(&y).unwrap_or(Ordering::Equal);
            if descending {
                ord.reverse()
            } else {
                ord
            }
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
