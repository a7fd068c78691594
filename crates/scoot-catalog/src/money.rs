//! Price formatting for catalog labels.
//!
//! Catalog prices are whole Colombian pesos. Labels group thousands with
//! `.` (the `es-CO` convention) and use a bare `$` prefix.

/// Separator placed between groups of three digits.
pub const THOUSANDS_SEPARATOR: char = '.';

/// Group the digits of a whole amount in threes.
///
/// ```
/// use scoot_catalog::money::format_thousands;
/// assert_eq!(format_thousands(1200000), "1.200.000");
/// assert_eq!(format_thousands(-950), "-950");
/// ```
pub fn format_thousands(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if amount < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(THOUSANDS_SEPARATOR);
        }
        grouped.push(ch);
    }

    grouped
}

/// Format a price as `$` followed by the grouped amount, rounded to whole pesos.
pub fn format_price(amount: f64) -> String {
    format!("${}", format_thousands(amount.round() as i64))
}

/// Format a price bound typed by the user.
///
/// Unparseable input is echoed back after the `$` so the label still
/// shows what was typed.
pub fn format_price_bound(raw: &str) -> String {
    match raw.trim().parse::<f64>() {
        Ok(amount) if amount.is_finite() => format_price(amount),
        _ => format!("${}", raw.trim()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1.000");
        assert_eq!(format_thousands(2500000), "2.500.000");
    }

    #[test]
    fn test_format_price_rounds() {
        assert_eq!(format_price(1499999.6), "$1.500.000");
    }

    #[test]
    fn test_format_price_bound() {
        assert_eq!(format_price_bound("1200000"), "$1.200.000");
        assert_eq!(format_price_bound("abc"), "$abc");
    }
}
