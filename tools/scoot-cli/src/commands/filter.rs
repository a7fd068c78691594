//! Catalog filter command.

use std::fs;

use anyhow::{Context as _, Result};
use scoot_catalog::catalog::ScooterModel;
use scoot_catalog::search::{count_active_filters, filter_summary, FilterState, SortOption};
use serde::Serialize;
use tracing::debug;

use super::FilterArgs;
use crate::context::Context;
use crate::output::column_width;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FilterReport {
    active_filters: usize,
    summary: Vec<String>,
    sort: &'static str,
    total: usize,
    models: Vec<ModelRow>,
}

#[derive(Serialize)]
struct ModelRow {
    id: String,
    name: String,
    brand: String,
    price: String,
    path: String,
}

impl ModelRow {
    fn new(model: &ScooterModel, path: Option<String>) -> Self {
        Self {
            id: model.id.to_string(),
            name: model.name.clone(),
            brand: model.brand_name().unwrap_or("").to_string(),
            price: model.price_label().unwrap_or_default(),
            path: path.unwrap_or_default(),
        }
    }
}

/// Run the filter command.
pub fn run(args: FilterArgs, ctx: &Context) -> Result<()> {
    let filters = read_filters(&args, ctx)?;
    let sort = SortOption::from_str(
        args.sort
            .as_deref()
            .unwrap_or(&ctx.config.display.default_sort),
    );
    let limit = args
        .limit
        .or(Some(ctx.config.display.max_results).filter(|&n| n > 0));

    let catalog = ctx.load_catalog(args.catalog.as_deref())?;
    let results = catalog.search(&filters, sort);
    debug!(
        total = catalog.models().len(),
        matched = results.len(),
        sort = sort.as_str(),
        "applied filters"
    );

    let paths = catalog.model_paths();
    let rows: Vec<ModelRow> = results
        .iter()
        .take(limit.unwrap_or(usize::MAX))
        .map(|m| ModelRow::new(m, paths.get(&m.id).cloned()))
        .collect();

    let report = FilterReport {
        active_filters: count_active_filters(&filters),
        summary: filter_summary(&filters),
        sort: sort.as_str(),
        total: results.len(),
        models: rows,
    };

    if ctx.output.is_json() {
        ctx.output.json(&report);
        return Ok(());
    }

    print_report(&report, sort, ctx);
    Ok(())
}

fn read_filters(args: &FilterArgs, ctx: &Context) -> Result<FilterState> {
    if let Some(path) = &args.filters {
        let path = ctx.resolve_path(path);
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read filters: {}", path.display()))?;
        return serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse filters: {}", path.display()));
    }

    Ok(args
        .query
        .as_deref()
        .map(FilterState::from_query_string)
        .unwrap_or_default())
}

fn print_report(report: &FilterReport, sort: SortOption, ctx: &Context) {
    ctx.output.header(&format!("{} modelos", report.total));
    ctx.output.kv("Ordenar por", sort.display_name());

    if report.active_filters > 0 {
        ctx.output
            .kv("Filtros activos", &report.active_filters.to_string());
        for chip in &report.summary {
            ctx.output.list_item(chip);
        }
    }

    if report.models.is_empty() {
        ctx.output.info("Ningún modelo coincide con los filtros");
        return;
    }

    let widths = [
        column_width("Modelo", report.models.iter().map(|r| r.name.as_str())),
        column_width("Marca", report.models.iter().map(|r| r.brand.as_str())),
        column_width("Precio", report.models.iter().map(|r| r.price.as_str())),
        column_width("Ruta", report.models.iter().map(|r| r.path.as_str())),
    ];

    println!();
    ctx.output
        .table_row(&["Modelo", "Marca", "Precio", "Ruta"], &widths);
    for row in &report.models {
        ctx.output.table_row(
            &[
                row.name.as_str(),
                row.brand.as_str(),
                row.price.as_str(),
                row.path.as_str(),
            ],
            &widths,
        );
    }

    if report.models.len() < report.total {
        ctx.output.info(&format!(
            "Mostrando {} de {}",
            report.models.len(),
            report.total
        ));
    }
}
