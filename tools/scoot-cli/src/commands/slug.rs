//! Slug inspection command.

use anyhow::Result;
use scoot_catalog::slug::{generate_slug, is_valid_slug, slug_to_title};
use serde::Serialize;

use super::SlugArgs;
use crate::context::Context;
use crate::output::yes_no;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SlugReport<'a> {
    input: &'a str,
    slug: String,
    valid: bool,
    brand_slug: String,
    title: String,
}

/// Run the slug command.
pub fn run(args: SlugArgs, ctx: &Context) -> Result<()> {
    let table = ctx.config.brand_table();

    let reports: Vec<SlugReport> = args
        .text
        .iter()
        .map(|input| {
            let slug = generate_slug(input);
            SlugReport {
                input,
                valid: is_valid_slug(&slug),
                brand_slug: table.brand_slug(input),
                title: slug_to_title(&slug),
                slug,
            }
        })
        .collect();

    if ctx.output.is_json() {
        ctx.output.json(&reports);
        return Ok(());
    }

    for report in &reports {
        ctx.output.header(report.input);
        ctx.output.kv("slug", &report.slug);
        ctx.output.kv("valid", &yes_no(report.valid));
        ctx.output.kv("brand slug", &report.brand_slug);
        ctx.output.kv("title", &report.title);
    }

    Ok(())
}
