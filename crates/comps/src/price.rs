//! Best-effort price extraction from free text.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref PRICE_PATTERN: Regex =
        Regex::new(r"\$?\s*([0-9]{1,6}(?:\.[0-9]{1,2})?)").expect("valid price pattern");
}

/// Pull the first price-looking number out of `text`.
///
/// Thousands separators are dropped first, so `"$1,250"` reads as `1250.0`.
/// This is a lossy heuristic: a snippet like `"3 drawers, $80"` yields `3.0`.
pub fn parse_price(text: &str) -> Option<f64> {
    if text.is_empty() {
        return None;
    }
    let cleaned = text.replace(',', "");
    let captures = PRICE_PATTERN.captures(&cleaned)?;
    captures.get(1)?.as_str().parse::<f64>().ok()
}
