//! Name → slug transformation and validation.

use once_cell::sync::Lazy;
use regex::Regex;

static SEPARATORS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\s_]+").unwrap());
static DISALLOWED: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^A-Za-z0-9_\-]+").unwrap());
static HYPHEN_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"-{2,}").unwrap());

/// Derive a URL slug from a display name.
///
/// The steps, in order:
/// 1. Lowercase and trim
/// 2. Replace runs of whitespace or underscores with a single `-`
/// 3. Drop every character outside ASCII letters, digits, `_` and `-`
/// 4. Collapse repeated hyphens
/// 5. Trim leading and trailing hyphens
///
/// Accented letters are dropped, not transliterated, so "Eléctrica"
/// becomes "elctrica". The result may be empty; check it with
/// [`is_valid_slug`] before routing on it.
///
/// ```
/// use scoot_catalog::slug::generate_slug;
/// assert_eq!(generate_slug("Xiaomi Mi Pro 2"), "xiaomi-mi-pro-2");
/// assert_eq!(generate_slug("xiaomi-mi-pro-2"), "xiaomi-mi-pro-2");
/// assert_eq!(generate_slug("!!!"), "");
/// ```
pub fn generate_slug(text: &str) -> String {
    let lowered = text.to_lowercase();
    let hyphenated = SEPARATORS.replace_all(lowered.trim(), "-");
    let stripped = DISALLOWED.replace_all(&hyphenated, "");
    let collapsed = HYPHEN_RUNS.replace_all(&stripped, "-");
    collapsed.trim_matches('-').to_string()
}

/// Return `true` when `slug` is non-empty and only uses `[a-z0-9-]`.
///
/// This is the gate for any slug taken from a URL path.
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .chars()
            .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-')
}

/// Turn a slug back into a readable label ("mi-pro-2" → "Mi Pro 2").
///
/// Lossy: casing and punctuation of the original name are gone. Use it for
/// fallback headings only, never to look records up.
pub fn slug_to_title(slug: &str) -> String {
    slug.split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Slug for a directory category name.
pub fn category_slug(name: &str) -> String {
    generate_slug(name)
}

/// Slug for a city name ("Bogotá D.C." → "bogot-dc").
pub fn city_slug(name: &str) -> String {
    generate_slug(name)
}
