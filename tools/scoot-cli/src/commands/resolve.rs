//! Slug resolution command.

use anyhow::{bail, Result};
use scoot_catalog::slug::{brand_path, business_path, category_path, city_path};
use scoot_data::{Catalog, DataError};
use serde::Serialize;
use serde_json::Value;

use super::{ResolveArgs, ResolveCommand};
use crate::context::Context;

/// Run the resolve command.
pub fn run(args: ResolveArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.load_catalog(args.catalog.as_deref())?;

    let mut resolved: Vec<Value> = Vec::new();
    let mut failures = 0;

    let mut report = |result: Result<Resolved, DataError>| match result {
        Ok(found) => {
            if !ctx.output.is_json() {
                ctx.output.success(&format!("{} → {}", found.path, found.name));
                for (key, value) in &found.details {
                    ctx.output.kv(key, value);
                }
            }
            resolved.push(found.record);
        }
        Err(e) => {
            failures += 1;
            ctx.output.error(&e.to_string());
        }
    };

    match args.command {
        ResolveCommand::Brand { slugs } => {
            for slug in &slugs {
                report(resolve_brand(&catalog, slug));
            }
        }
        ResolveCommand::Model { brand, model } => {
            report(resolve_model(&catalog, &brand, &model));
        }
        ResolveCommand::Business { slugs } => {
            for slug in &slugs {
                report(resolve_business(&catalog, slug));
            }
        }
        ResolveCommand::Category { slugs } => {
            for slug in &slugs {
                report(resolve_category(&catalog, slug));
            }
        }
        ResolveCommand::City { slug } => {
            report(resolve_city(&catalog, &slug));
        }
    }

    if ctx.output.is_json() {
        ctx.output.json(&resolved);
    }

    if failures > 0 {
        bail!("{} slug(s) could not be resolved", failures);
    }
    Ok(())
}

/// A resolved record: its page, a display name, and the record itself.
struct Resolved {
    path: String,
    name: String,
    details: Vec<(&'static str, String)>,
    record: Value,
}

impl Resolved {
    fn new(path: String, name: &str, record: &impl Serialize) -> Result<Self, DataError> {
        Ok(Self {
            path,
            name: name.to_string(),
            details: Vec::new(),
            record: serde_json::to_value(record)?,
        })
    }

    fn detail(mut self, key: &'static str, value: Option<impl ToString>) -> Self {
        if let Some(value) = value {
            self.details.push((key, value.to_string()));
        }
        self
    }
}

fn resolve_brand(catalog: &Catalog, slug: &str) -> Result<Resolved, DataError> {
    let brand = catalog.brand_by_slug(slug)?;
    let models = catalog.models_for_brand(slug)?;
    Ok(Resolved::new(brand_path(slug), &brand.name, brand)?
        .detail("id", Some(&brand.id))
        .detail("país", brand.country.as_deref())
        .detail("modelos", Some(models.len())))
}

fn resolve_model(catalog: &Catalog, brand_slug: &str, model_slug: &str) -> Result<Resolved, DataError> {
    let model = catalog.model_by_slug(brand_slug, model_slug)?;
    let path = catalog
        .model_path(model)
        .unwrap_or_else(|| scoot_catalog::slug::model_path(brand_slug, model_slug));
    Ok(Resolved::new(path, &model.name, model)?
        .detail("id", Some(&model.id))
        .detail("marca", model.brand_name())
        .detail("precio", model.price_label())
        .detail("velocidad", model.max_speed.map(|v| format!("{} km/h", v)))
        .detail("autonomía", model.range_km.map(|v| format!("{} km", v))))
}

fn resolve_business(catalog: &Catalog, slug: &str) -> Result<Resolved, DataError> {
    let business = catalog.business_by_slug(slug)?;
    Ok(Resolved::new(business_path(&business.slug), &business.name, business)?
        .detail("id", Some(&business.id))
        .detail("ciudad", business.city.as_deref())
        .detail("verificado", Some(business.verified)))
}

fn resolve_category(catalog: &Catalog, slug: &str) -> Result<Resolved, DataError> {
    let category = catalog.category_by_slug(slug)?;
    let count = catalog
        .businesses()
        .iter()
        .filter(|b| b.category_id.as_ref() == Some(&category.id))
        .count();
    Ok(Resolved::new(category_path(&category.route_slug()), &category.name, category)?
        .detail("id", Some(&category.id))
        .detail("negocios", Some(count)))
}

fn resolve_city(catalog: &Catalog, slug: &str) -> Result<Resolved, DataError> {
    let businesses = catalog.businesses_in_city(slug)?;
    let name = businesses
        .iter()
        .find_map(|b| b.city.as_deref())
        .unwrap_or(slug)
        .to_string();
    let mut resolved = Resolved::new(city_path(slug), &name, &businesses)?;
    for business in businesses {
        resolved = resolved.detail("negocio", Some(&business.name));
    }
    Ok(resolved)
}
