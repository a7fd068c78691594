//! CLI configuration.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use scoot_catalog::search::SortOption;
use scoot_catalog::slug::BrandSlugTable;
use serde::{Deserialize, Serialize};

/// File names searched for, in order, from the working directory upwards.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["scoot.toml", ".scoot.toml", "scoot.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScootConfig {
    /// Where catalog records come from.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Result display settings.
    #[serde(default)]
    pub display: DisplayConfig,

    /// Brand slug overrides, layered over the builtin table.
    #[serde(default)]
    pub brands: BTreeMap<String, String>,
}

impl ScootConfig {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if is_json(path) {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = if is_json(path) {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }

    /// Builtin brand slugs with the configured overrides on top.
    pub fn brand_table(&self) -> BrandSlugTable {
        BrandSlugTable::builtin().with_overrides(&self.brands)
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

/// Catalog source configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// JSON export of the catalog. Unset means the sample data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// Use the sample data when the export can't be read.
    #[serde(default = "default_true")]
    pub fallback_to_mock: bool,
}

fn default_true() -> bool {
    true
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: None,
            fallback_to_mock: true,
        }
    }
}

/// Display configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Sort order when `--sort` is not given.
    #[serde(default = "default_sort")]
    pub default_sort: String,

    /// Maximum number of models listed (0 lists all).
    #[serde(default)]
    pub max_results: usize,
}

fn default_sort() -> String {
    SortOption::default().as_str().to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            default_sort: default_sort(),
            max_results: 0,
        }
    }
}

/// Generate a default scoot.toml config file.
pub fn generate_default_config() -> String {
    r#"# Scooter catalog configuration

[catalog]
# JSON export with "modelos", "marcas", "negocios" and "categorias"
# path = "catalog.json"
fallback_to_mock = true

[display]
# name, price_asc, price_desc, speed, range, newest
default_sort = "name"
max_results = 0

[brands]
# Pin a brand's URL slug
# "Segway Ninebot" = "segway-ninebot"
"#
    .to_string()
}
