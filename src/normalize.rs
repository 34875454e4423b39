use unicode_normalization::UnicodeNormalization;

/// Fold localized text for comparison: NFKD-decompose, drop everything
/// outside ASCII (combining accents included), lowercase.
///
/// "Kraków" and "krakow" fold to the same string. Idempotent.
pub fn fold_locale(text: &str) -> String {
    text.nfkd()
        .filter(char::is_ascii)
        .collect::<String>()
        .to_lowercase()
}

/// Sort key for ranking listings by price.
///
/// Keeps only the digits of the raw price text; returns `f64::INFINITY`
/// when no digits are present so unparsable prices sort last instead of
/// breaking the sort.
pub fn price_sort_key(price_text: &str) -> f64 {
    let digits: String = price_text.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse::<u64>().map(|v| v as f64).unwrap_or(f64::INFINITY)
}

/// Parse a raw OLX price like "250 000 zł" into an integer number of złoty.
pub fn parse_price(price_text: &str) -> Option<i64> {
    price_text
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .trim_end_matches("zł")
        .parse()
        .ok()
}

/// Parse a raw area like "500 m²" into square meters.
pub fn parse_area(area_text: &str) -> Option<i64> {
    area_text
        .trim_end_matches("m²")
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .parse()
        .ok()
}

/// Price per square meter rounded to 2 decimals, or `None` when either
/// input is missing or the area is zero.
pub fn price_per_sqm(price: Option<i64>, area: Option<i64>) -> Option<f64> {
    match (price, area) {
        (Some(price), Some(area)) if area > 0 => {
            Some((price as f64 / area as f64 * 100.0).round() / 100.0)
        }
        _ => None,
    }
}
