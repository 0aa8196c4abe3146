// ABOUTME: Embedded product-schema (JSON-LD) fallback for price extraction.
// ABOUTME: Scans ld+json script blocks in document order; malformed blocks are skipped, never fatal.

//! Structured-data price fallback.
//!
//! When the selector cascades find no price, the page may still carry
//! machine-readable product metadata in `script[type="application/ld+json"]`
//! blocks. Blocks are scanned in document order; the first one exposing a
//! parseable `offers.price` or `price` field wins. A block that fails to
//! parse is treated as "no price here" and the scan moves on.

use scraper::Html;
use serde_json::Value;

use crate::extractors::compiled::cached_selector;

/// Scan every embedded JSON-LD block for a usable price field.
pub fn price_from_structured_data(doc: &Html) -> Option<f64> {
    let sel = cached_selector("script[type='application/ld+json']")?;
    for script in doc.select(&sel) {
        let raw = script.text().collect::<String>();
        let Ok(value) = serde_json::from_str::<Value>(&raw) else {
            continue;
        };
        if let Some(price) = find_price(&value) {
            return Some(price);
        }
    }
    None
}

/// Find a price in a JSON-LD value: `offers.price` is preferred over a
/// top-level `price`; arrays and `@graph` wrappers are walked in order.
fn find_price(value: &Value) -> Option<f64> {
    match value {
        Value::Object(map) => {
            if let Some(offers) = map.get("offers") {
                if let Some(price) = offers_price(offers) {
                    return Some(price);
                }
            }
            if let Some(price) = map.get("price").and_then(parse_price_value) {
                return Some(price);
            }
            if let Some(graph) = map.get("@graph") {
                return find_price(graph);
            }
            None
        }
        Value::Array(items) => items.iter().find_map(find_price),
        _ => None,
    }
}

/// Price of an offer object, or of the first offer in an array of them.
fn offers_price(offers: &Value) -> Option<f64> {
    match offers {
        Value::Object(map) => map.get("price").and_then(parse_price_value),
        Value::Array(items) => items.iter().find_map(offers_price),
        _ => None,
    }
}

/// Parse a JSON price value: a number directly, or a numeric string.
fn parse_price_value(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    parsed.is_finite().then_some(parsed)
}
