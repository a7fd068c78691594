//! Brand slug override table.
//!
//! Well-known brands have their slug pinned so that their URLs survive
//! changes to the slug rule or to the brand's stored display name.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;

use super::generate_slug;

/// Pinned slugs for brands carried by Colombian dealers.
const BUILTIN_BRAND_SLUGS: &[(&str, &str)] = &[
    ("xiaomi", "xiaomi"),
    ("segway", "segway"),
    ("ninebot", "ninebot"),
    ("segway ninebot", "segway-ninebot"),
    ("segway-ninebot", "segway-ninebot"),
    ("kugoo", "kugoo"),
    ("kaabo", "kaabo"),
    ("dualtron", "dualtron"),
    ("minimotors", "minimotors"),
    ("inokim", "inokim"),
    ("vsett", "vsett"),
    ("zero", "zero"),
    ("apollo", "apollo"),
    ("e-twow", "e-twow"),
    ("niu", "niu"),
    ("mercane", "mercane"),
    ("starker", "starker"),
    ("auteco", "auteco"),
];

static BUILTIN: Lazy<BrandSlugTable> =
    Lazy::new(|| BrandSlugTable::from_pairs(BUILTIN_BRAND_SLUGS.iter().copied()));

/// Read-only mapping from normalized brand name to slug.
///
/// Keys are normalized (lowercased, trimmed) when the table is built, and
/// names are normalized the same way on lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrandSlugTable {
    entries: BTreeMap<String, String>,
}

impl BrandSlugTable {
    /// Shared table with the builtin overrides.
    pub fn builtin() -> &'static BrandSlugTable {
        &BUILTIN
    }

    /// Build a table from `(name, slug)` pairs.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        let entries = pairs
            .into_iter()
            .map(|(name, slug)| (normalize(name.as_ref()), slug.into()))
            .collect();
        Self { entries }
    }

    /// Copy of this table with extra pairs layered on top.
    pub fn with_overrides<K, V>(&self, pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut merged = self.clone();
        for (name, slug) in pairs {
            merged.entries.insert(normalize(name.as_ref()), slug.into());
        }
        merged
    }

    /// Pinned slug for a brand name, if any.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(&normalize(name)).map(String::as_str)
    }

    /// Slug for a brand: the pinned one if present, the generic rule otherwise.
    pub fn brand_slug(&self, name: &str) -> String {
        match self.get(name) {
            Some(slug) => slug.to_string(),
            None => generate_slug(name),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Slug for a brand name using the builtin table.
pub fn brand_slug(name: &str) -> String {
    BrandSlugTable::builtin().brand_slug(name)
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_lookup_is_normalized() {
        assert_eq!(brand_slug("Xiaomi"), "xiaomi");
        assert_eq!(brand_slug("  XIAOMI "), "xiaomi");
        assert_eq!(brand_slug("Segway Ninebot"), "segway-ninebot");
    }

    #[test]
    fn test_unknown_brand_falls_back_to_generic_rule() {
        assert_eq!(brand_slug("Patinetas Andinas"), "patinetas-andinas");
        assert_eq!(brand_slug("!!!"), "");
    }

    #[test]
    fn test_override_wins_over_generic_rule() {
        let table = BrandSlugTable::from_pairs([("Mi Electric", "xiaomi")]);
        assert_eq!(table.brand_slug("mi electric"), "xiaomi");
        assert_eq!(table.brand_slug("Kugoo"), "kugoo");
    }

    #[test]
    fn test_with_overrides_layers_on_top() {
        let table = BrandSlugTable::builtin().with_overrides([("XIAOMI", "mi")]);
        assert_eq!(table.brand_slug("Xiaomi"), "mi");
        assert_eq!(table.len(), BrandSlugTable::builtin().len());
        assert_eq!(BrandSlugTable::builtin().brand_slug("Xiaomi"), "xiaomi");
    }
}
