//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};
use scoot_catalog::search::SortOption;
use scoot_catalog::slug::is_valid_slug;

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, ScootConfig, CONFIG_FILE_NAMES};
use crate::context::Context;

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Get { key } => get_config(&key, ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
        ConfigCommand::Validate => validate_config(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    ctx.output.info("");
    ctx.output.info("[catalog]");
    ctx.output.kv(
        "path",
        ctx.config.catalog.path.as_deref().unwrap_or("(sample data)"),
    );
    ctx.output.kv(
        "fallback_to_mock",
        &ctx.config.catalog.fallback_to_mock.to_string(),
    );

    ctx.output.info("");
    ctx.output.info("[display]");
    ctx.output.kv("default_sort", &ctx.config.display.default_sort);
    ctx.output
        .kv("max_results", &ctx.config.display.max_results.to_string());

    if !ctx.config.brands.is_empty() {
        ctx.output.info("");
        ctx.output.info("[brands]");
        for (name, slug) in &ctx.config.brands {
            ctx.output.kv(name, slug);
        }
    }

    Ok(())
}

fn get_config(key: &str, ctx: &Context) -> Result<()> {
    let value = get_config_value(&ctx.config, key)?;

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({ "key": key, "value": value }));
    } else {
        println!("{}", value);
    }

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_FILE_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config())?;

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let errors = config_errors(&ctx.config);
    let mut warnings: Vec<String> = Vec::new();

    match ctx.catalog_path(None) {
        None => warnings.push("catalog.path is not set, the sample data will be used".to_string()),
        Some(path) if !path.is_file() => {
            warnings.push(format!("catalog.path '{}' does not exist", path.display()))
        }
        Some(_) => {}
    }

    if errors.is_empty() && warnings.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for error in &errors {
        ctx.output.error(&format!("Error: {}", error));
    }

    for warning in &warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    if !errors.is_empty() {
        bail!("Configuration has {} error(s)", errors.len());
    }

    ctx.output.success("Configuration is valid (with warnings)");

    Ok(())
}

fn config_errors(config: &ScootConfig) -> Vec<String> {
    let mut errors = Vec::new();

    let sort = &config.display.default_sort;
    if SortOption::from_str(sort).as_str() != sort.as_str() {
        errors.push(format!("display.default_sort '{}' is not a known sort order", sort));
    }

    for (name, slug) in &config.brands {
        if !is_valid_slug(slug) {
            errors.push(format!("brands.\"{}\" = '{}' is not a valid slug", name, slug));
        }
    }

    errors
}

fn get_config_value(config: &ScootConfig, key: &str) -> Result<String> {
    let mut parts = key.splitn(2, '.');
    let section = parts.next().unwrap_or_default();
    let field = parts.next().unwrap_or_default();

    match (section, field) {
        ("catalog", "path") => Ok(config
            .catalog
            .path
            .as_ref()
            .map(|p| format!("\"{}\"", p))
            .unwrap_or_else(|| "null".to_string())),
        ("catalog", "fallback_to_mock") => Ok(config.catalog.fallback_to_mock.to_string()),
        ("display", "default_sort") => Ok(format!("\"{}\"", config.display.default_sort)),
        ("display", "max_results") => Ok(config.display.max_results.to_string()),
        ("brands", name) if !name.is_empty() => match config.brand_table().get(name) {
            Some(slug) => Ok(format!("\"{}\"", slug)),
            None => bail!("No pinned slug for brand: {}", name),
        },
        _ => bail!("Unknown config key: {}", key),
    }
}
