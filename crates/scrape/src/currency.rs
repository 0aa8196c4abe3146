// ABOUTME: Polish price text normalizer converting locale-formatted amounts to f64.
// ABOUTME: Strips zł/PLN/złotych markers, treats the comma as the decimal separator.

//! Price text normalization.
//!
//! Converts Polish-formatted price strings (`"99,90 zł"`, `"1 234,50 PLN"`)
//! into numeric values. The rules are deliberately specific to one locale:
//! the comma is the decimal separator (not a thousands separator), and the
//! recognized currency markers are the złoty's symbol, code and written name.
//! This is a documented scope decision, not a generalized currency parser;
//! broader support would come from injecting a locale configuration here.

use once_cell::sync::Lazy;
use regex::Regex;

/// Whole-word currency markers, matched against lowercased input.
/// `złotych` precedes `zł` so the longer form wins the alternation.
static CURRENCY_MARKERS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:złotych|zł|pln)\b").unwrap());

/// Everything that is not a digit, comma or period.
static NON_PRICE_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^0-9,.]").unwrap());

/// First maximal integer-or-decimal run in the cleaned string.
static NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+\.?\d*").unwrap());

/// Normalize a locale-formatted price string to a numeric value.
///
/// Steps, in order: lowercase and trim; strip whole-word currency markers;
/// strip every character that is not a digit, comma or period; convert the
/// first remaining comma into a period; parse the first numeric run.
///
/// Returns `None` when no numeric run remains or the parse is not finite.
pub fn normalize_price(text: &str) -> Option<f64> {
    let lowered = text.trim().to_lowercase();
    let unmarked = CURRENCY_MARKERS.replace_all(&lowered, "");
    let cleaned = NON_PRICE_CHARS.replace_all(&unmarked, "");
    let cleaned = cleaned.replacen(',', ".", 1);

    let run = NUMBER.find(&cleaned)?;
    let value: f64 = run.as_str().parse().ok()?;
    value.is_finite().then_some(value)
}
