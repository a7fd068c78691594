//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use scoot_data::{Catalog, JsonCatalog};
use tracing::debug;

use crate::config::{ScootConfig, CONFIG_FILE_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: ScootConfig,
    /// File the configuration came from, if any.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = match config_path {
            Some(path) => {
                let path = resolve_against(&cwd, path);
                (ScootConfig::load(&path)?, Some(path))
            }
            None => match find_config(&cwd) {
                Some(path) => (ScootConfig::load(&path)?, Some(path)),
                None => (ScootConfig::default(), None),
            },
        };
        debug!(config = ?config_path, "loaded configuration");

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Catalog export to read.
    ///
    /// `path` overrides the configured export. Relative configured paths
    /// are resolved against the config file's directory.
    pub fn catalog_path(&self, path: Option<&str>) -> Option<PathBuf> {
        match path {
            Some(p) => Some(self.resolve_path(p)),
            None => self.config.catalog.path.as_deref().map(|p| {
                let base = self
                    .config_path
                    .as_deref()
                    .and_then(Path::parent)
                    .unwrap_or(self.cwd.as_path());
                resolve_against(base, p)
            }),
        }
    }

    /// Load the catalog, from the sample data when no export is configured.
    pub fn load_catalog(&self, path: Option<&str>) -> Result<Catalog> {
        let catalog = match self.catalog_path(path) {
            None => {
                self.output.debug("No catalog export configured, using sample data");
                Catalog::mock()
            }
            Some(path) => {
                let source = JsonCatalog::new(&path);
                if self.config.catalog.fallback_to_mock {
                    let catalog = Catalog::load_or_mock(&source);
                    if catalog.is_mock() {
                        self.output.warn(&format!(
                            "Could not read {}, showing sample data",
                            path.display()
                        ));
                    }
                    catalog
                } else {
                    Catalog::load(&source)
                        .with_context(|| format!("Failed to load catalog: {}", path.display()))?
                }
            }
        };

        Ok(catalog.with_brand_table(self.config.brand_table()))
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        resolve_against(&self.cwd, path)
    }
}

/// Find config file in directory tree.
pub fn find_config(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        for name in CONFIG_FILE_NAMES {
            let config_path = current.join(name);
            if config_path.is_file() {
                return Some(config_path);
            }
        }

        if !current.pop() {
            return None;
        }
    }
}

fn resolve_against(base: &Path, path: &str) -> PathBuf {
    let path = PathBuf::from(path);
    if path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_config_walks_up() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(".scoot.toml"), "").unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        assert_eq!(find_config(&nested), Some(dir.path().join(".scoot.toml")));
    }

    #[test]
    fn test_find_config_prefers_first_name() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("scoot.json"), "{}").unwrap();
        std::fs::write(dir.path().join("scoot.toml"), "").unwrap();

        assert_eq!(find_config(dir.path()), Some(dir.path().join("scoot.toml")));
    }

    fn context_with(config: ScootConfig, config_path: Option<PathBuf>, cwd: &Path) -> Context {
        Context {
            config,
            config_path,
            output: Output::new(false, true),
            cwd: cwd.to_path_buf(),
        }
    }

    #[test]
    fn test_missing_export_falls_back_to_mock() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = context_with(ScootConfig::default(), None, dir.path());
        let catalog = ctx.load_catalog(Some("missing.json")).unwrap();
        assert!(catalog.is_mock());
    }

    #[test]
    fn test_missing_export_without_fallback_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = ScootConfig::default();
        config.catalog.fallback_to_mock = false;
        let ctx = context_with(config, None, dir.path());
        assert!(ctx.load_catalog(Some("missing.json")).is_err());
    }

    #[test]
    fn test_configured_path_is_relative_to_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let config_dir = dir.path().join("conf");
        std::fs::create_dir_all(&config_dir).unwrap();
        std::fs::write(
            config_dir.join("export.json"),
            r#"{ "marcas": [{ "id": "b-1", "nombre": "Kaabo" }] }"#,
        )
        .unwrap();

        let mut config = ScootConfig::default();
        config.catalog.path = Some("export.json".into());
        config.catalog.fallback_to_mock = false;
        let ctx = context_with(config, Some(config_dir.join("scoot.toml")), dir.path());

        let catalog = ctx.load_catalog(None).unwrap();
        assert_eq!(catalog.brands().len(), 1);
        assert!(catalog.brand_by_slug("kaabo").is_ok());
    }
}
