//! Per-brand disambiguation of model slugs.
//!
//! Two models of the same brand can share a name ("Pro 2" imported twice
//! with different trims). Model URLs are nested under the brand slug, so
//! the disambiguation scope is the brand slug a model routes under, not
//! its `brand_id`: two brand rows whose names slugify alike share one
//! scope. Within a scope, models claim slugs in collection order: the
//! first keeps the base slug and each later collision takes the lowest
//! free `-N` suffix starting at 2.

use std::collections::{HashMap, HashSet};

use crate::catalog::{Brand, ScooterModel};
use crate::ids::{BrandId, ModelId};

use super::{generate_slug, model_path, BrandSlugTable};

/// Fallback base when neither the name nor the ID yields a slug.
const EMPTY_NAME_BASE: &str = "modelo";

/// Tracks the slugs already claimed inside one brand.
#[derive(Debug, Default)]
pub struct ScopedSlugger {
    used: HashSet<String>,
}

impl ScopedSlugger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim `base`, or the first `base-N` (N ≥ 2) not yet taken.
    pub fn claim(&mut self, base: &str) -> String {
        let mut candidate = base.to_string();
        let mut n = 2;
        while self.used.contains(&candidate) {
            candidate = format!("{}-{}", base, n);
            n += 1;
        }
        self.used.insert(candidate.clone());
        candidate
    }
}

/// Brand slugs keyed by brand ID, first row per ID wins.
#[derive(Debug)]
pub(crate) struct BrandRoutes<'a> {
    by_id: HashMap<&'a BrandId, String>,
    table: &'a BrandSlugTable,
}

impl<'a> BrandRoutes<'a> {
    pub(crate) fn new(brands: &'a [Brand], table: &'a BrandSlugTable) -> Self {
        let mut by_id = HashMap::with_capacity(brands.len());
        for brand in brands {
            by_id
                .entry(&brand.id)
                .or_insert_with(|| table.brand_slug(&brand.name));
        }
        Self { by_id, table }
    }

    /// Brand slug the model's page lives under: the brand row's, else the
    /// slug of the denormalized brand name.
    pub(crate) fn brand_slug(&self, model: &ScooterModel) -> Option<String> {
        match self.by_id.get(&model.brand_id) {
            Some(slug) => Some(slug.clone()),
            None => model.brand_name().map(|name| self.table.brand_slug(name)),
        }
    }

    /// Disambiguation scope. Models with no known brand are scoped by
    /// their `brand_id`; `#` keeps that key apart from any real slug.
    fn scope(&self, model: &ScooterModel) -> String {
        self.brand_slug(model)
            .unwrap_or_else(|| format!("#{}", model.brand_id))
    }
}

/// Brand slug a model's page is nested under, if its brand is known.
pub fn model_brand_slug(
    model: &ScooterModel,
    brands: &[Brand],
    table: &BrandSlugTable,
) -> Option<String> {
    BrandRoutes::new(brands, table).brand_slug(model)
}

/// Base slug for a model before disambiguation.
pub fn model_base_slug(model: &ScooterModel) -> String {
    let from_name = generate_slug(&model.name);
    if !from_name.is_empty() {
        return from_name;
    }
    let from_id = generate_slug(model.id.as_str());
    if !from_id.is_empty() {
        return from_id;
    }
    EMPTY_NAME_BASE.to_string()
}

/// Final slugs for every model in the collection, keyed by model ID.
///
/// Deterministic: the same collection in the same order always yields the
/// same map. If an ID appears twice only its first row claims a slug.
pub fn model_slugs(
    models: &[ScooterModel],
    brands: &[Brand],
    table: &BrandSlugTable,
) -> HashMap<ModelId, String> {
    routed_slugs(models, &BrandRoutes::new(brands, table))
}

pub(crate) fn routed_slugs(models: &[ScooterModel], routes: &BrandRoutes<'_>) -> HashMap<ModelId, String> {
    let mut scopes: HashMap<String, ScopedSlugger> = HashMap::new();
    let mut slugs = HashMap::with_capacity(models.len());

    for model in models {
        if slugs.contains_key(&model.id) {
            continue;
        }
        let slug = scopes
            .entry(routes.scope(model))
            .or_default()
            .claim(&model_base_slug(model));
        slugs.insert(model.id.clone(), slug);
    }

    slugs
}

/// Page paths for every model whose brand slug is known, keyed by model ID.
pub fn model_paths(
    models: &[ScooterModel],
    brands: &[Brand],
    table: &BrandSlugTable,
) -> HashMap<ModelId, String> {
    let routes = BrandRoutes::new(brands, table);
    let slugs = routed_slugs(models, &routes);

    models
        .iter()
        .filter_map(|model| {
            let brand_slug = routes.brand_slug(model)?;
            let model_slug = slugs.get(&model.id)?;
            Some((model.id.clone(), model_path(&brand_slug, model_slug)))
        })
        .collect()
}

/// Unique slug for `model` among the models sharing its brand slug in
/// `collection`.
///
/// If `model` is not part of `collection` (e.g. a record being created), it
/// is treated as appended after the existing rows.
pub fn unique_model_slug(
    model: &ScooterModel,
    collection: &[ScooterModel],
    brands: &[Brand],
    table: &BrandSlugTable,
) -> String {
    let routes = BrandRoutes::new(brands, table);
    let scope = routes.scope(model);
    let mut slugger = ScopedSlugger::new();
    let mut seen = HashSet::new();

    for sibling in collection.iter().filter(|m| routes.scope(m) == scope) {
        if !seen.insert(&sibling.id) {
            continue;
        }
        let claimed = slugger.claim(&model_base_slug(sibling));
        if sibling.id == model.id {
            return claimed;
        }
    }

    slugger.claim(&model_base_slug(model))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn model(id: &str, name: &str, brand: &str) -> ScooterModel {
        ScooterModel::new(id, name, brand)
    }

    fn slug_of(model: &ScooterModel, models: &[ScooterModel]) -> String {
        unique_model_slug(model, models, &[], BrandSlugTable::builtin())
    }

    #[test]
    fn test_no_collision_keeps_base() {
        let models = vec![model("1", "Mi Pro 2", "xiaomi"), model("2", "Mi 3", "xiaomi")];
        assert_eq!(slug_of(&models[0], &models), "mi-pro-2");
        assert_eq!(slug_of(&models[1], &models), "mi-3");
    }

    #[test]
    fn test_collision_within_brand_gets_ordinal() {
        let models = vec![
            model("1", "Pro 2", "xiaomi"),
            model("2", "Pro  2", "xiaomi"),
            model("3", "PRO 2", "xiaomi"),
        ];
        assert_eq!(slug_of(&models[0], &models), "pro-2");
        assert_eq!(slug_of(&models[1], &models), "pro-2-2");
        assert_eq!(slug_of(&models[2], &models), "pro-2-3");
    }

    #[test]
    fn test_other_brands_do_not_collide() {
        let models = vec![model("1", "Pro", "xiaomi"), model("2", "Pro", "kugoo")];
        assert_eq!(slug_of(&models[0], &models), "pro");
        assert_eq!(slug_of(&models[1], &models), "pro");
    }

    #[test]
    fn test_suffix_skips_literal_names() {
        let models = vec![
            model("1", "Max", "b"),
            model("2", "Max 2", "b"),
            model("3", "Max", "b"),
        ];
        assert_eq!(slug_of(&models[2], &models), "max-3");
    }

    #[test]
    fn test_new_record_is_appended() {
        let models = vec![model("1", "Air", "b")];
        let draft = model("new", "Air", "b");
        assert_eq!(slug_of(&draft, &models), "air-2");
    }

    #[test]
    fn test_empty_name_uses_id() {
        let models = vec![model("A1B2", "???", "b"), model("", "", "b")];
        assert_eq!(slug_of(&models[0], &models), "a1b2");
        assert_eq!(slug_of(&models[1], &models), "modelo");
    }

    #[test]
    fn test_repeated_calls_agree() {
        let models = vec![model("1", "X", "b"), model("2", "X", "b")];
        let first = slug_of(&models[1], &models);
        let second = slug_of(&models[1], &models);
        assert_eq!(first, second);
        assert_eq!(model_slugs(&models, &[], BrandSlugTable::builtin())[&ModelId::new("2")], first);
    }

    #[test]
    fn test_brand_rows_with_same_slug_share_a_scope() {
        let table = BrandSlugTable::builtin();
        let brands = vec![Brand::new("b-1", "Xiaomi"), Brand::new("b-3", "XIAOMI ")];
        let models = vec![
            model("m-1", "Mi Pro 2", "b-1"),
            model("m-3", "Mi Pro 2", "b-3"),
        ];

        assert_eq!(unique_model_slug(&models[0], &models, &brands, table), "mi-pro-2");
        assert_eq!(unique_model_slug(&models[1], &models, &brands, table), "mi-pro-2-2");

        let paths = model_paths(&models, &brands, table);
        assert_eq!(paths[&ModelId::new("m-1")], "/marcas/xiaomi/mi-pro-2");
        assert_eq!(paths[&ModelId::new("m-3")], "/marcas/xiaomi/mi-pro-2-2");
    }

    #[test]
    fn test_denormalized_brand_joins_the_row_scope() {
        let table = BrandSlugTable::builtin();
        let brands = vec![Brand::new("b-1", "Xiaomi")];
        let models = vec![
            model("m-1", "Mi 3", "b-1"),
            model("m-2", "Mi 3", "b-orphan").with_brand_name("xiaomi"),
            model("m-3", "Mi 3", "b-unknown"),
        ];

        let slugs = model_slugs(&models, &brands, table);
        assert_eq!(slugs[&ModelId::new("m-2")], "mi-3-2");
        assert_eq!(slugs[&ModelId::new("m-3")], "mi-3");
        assert_eq!(model_brand_slug(&models[1], &brands, table).as_deref(), Some("xiaomi"));
        assert_eq!(model_brand_slug(&models[2], &brands, table), None);
        assert!(!model_paths(&models, &brands, table).contains_key(&ModelId::new("m-3")));
    }

    proptest! {
        #[test]
        fn slugs_are_unique_within_brand_slug(
            rows in proptest::collection::vec(
                ("(Pro|Max|Air|pro 2|Max-2|x|!!)", 0..4usize),
                0..24,
            )
        ) {
            let table = BrandSlugTable::builtin();
            // b0 and b1 slugify alike; b3 has no brand row.
            let brands = vec![
                Brand::new("b0", "Xiaomi"),
                Brand::new("b1", " XIAOMI"),
                Brand::new("b2", "Kugoo"),
            ];
            let models: Vec<ScooterModel> = rows
                .iter()
                .enumerate()
                .map(|(i, (name, brand))| model(&format!("id{}", i), name, &format!("b{}", brand)))
                .collect();
            let slugs = model_slugs(&models, &brands, table);

            let mut seen: HashSet<(String, String)> = HashSet::new();
            for m in &models {
                let scope = model_brand_slug(m, &brands, table)
                    .unwrap_or_else(|| format!("#{}", m.brand_id));
                let slug = unique_model_slug(m, &models, &brands, table);
                prop_assert!(!slug.is_empty());
                prop_assert!(seen.insert((scope, slug.clone())), "duplicate slug {}", slug);
                prop_assert_eq!(slugs[&m.id].clone(), slug);
            }
        }
    }
}
