//! Catalog snapshots stored as JSON files.

use std::fs;
use std::path::{Path, PathBuf};

use scoot_catalog::catalog::{Brand, Business, Category, ScooterModel};
use tracing::debug;

use crate::{CatalogSnapshot, CatalogSource, DataError};

/// Reads a [`CatalogSnapshot`] from a JSON file on every fetch.
#[derive(Debug, Clone)]
pub struct JsonCatalog {
    path: PathBuf,
}

impl JsonCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<CatalogSnapshot, DataError> {
        let content = fs::read_to_string(&self.path)
            .map_err(|e| DataError::Io(format!("{}: {}", self.path.display(), e)))?;
        let snapshot: CatalogSnapshot = serde_json::from_str(&content)
            .map_err(|e| DataError::Parse(format!("{}: {}", self.path.display(), e)))?;
        debug!(
            path = %self.path.display(),
            models = snapshot.models.len(),
            brands = snapshot.brands.len(),
            businesses = snapshot.businesses.len(),
            categories = snapshot.categories.len(),
            "read catalog snapshot"
        );
        Ok(snapshot)
    }
}

impl CatalogSource for JsonCatalog {
    fn name(&self) -> &str {
        "json"
    }

    fn fetch_models(&self) -> Result<Vec<ScooterModel>, DataError> {
        Ok(self.read()?.models)
    }

    fn fetch_brands(&self) -> Result<Vec<Brand>, DataError> {
        Ok(self.read()?.brands)
    }

    fn fetch_businesses(&self) -> Result<Vec<Business>, DataError> {
        Ok(self.read()?.businesses)
    }

    fn fetch_categories(&self) -> Result<Vec<Category>, DataError> {
        Ok(self.read()?.categories)
    }

    fn fetch_snapshot(&self) -> Result<CatalogSnapshot, DataError> {
        self.read()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_reads_snapshot() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "marcas": [{{ "id": "b-1", "nombre": "Xiaomi" }}],
                "modelos": [{{ "id": "m-1", "nombre": "Mi 3", "marca_id": "b-1", "velocidad_maxima": 25 }}]
            }}"#
        )
        .unwrap();

        let source = JsonCatalog::new(file.path());
        let snapshot = source.fetch_snapshot().unwrap();
        assert_eq!(snapshot.brands.len(), 1);
        assert_eq!(snapshot.models[0].max_speed, Some(25.0));
        assert!(snapshot.businesses.is_empty());
        assert_eq!(source.fetch_models().unwrap().len(), 1);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = JsonCatalog::new(dir.path().join("missing.json"));
        assert!(matches!(source.fetch_snapshot(), Err(DataError::Io(_))));
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ \"modelos\": 3 }}").unwrap();
        let source = JsonCatalog::new(file.path());
        assert!(matches!(source.fetch_brands(), Err(DataError::Parse(_))));
    }
}
