// ABOUTME: Current-price and comparison-price extraction cascades with strikethrough exclusion.
// ABOUTME: Selector strategies first, then a last-resort scan for currency-marker text.

//! Price extraction.
//!
//! The current-price cascade walks sale-price selectors in order and, per
//! selector, scans matching elements in document order. Candidates are
//! filtered hard: empty or over-long text is skipped, anything inside a
//! crossed-out/old-price container is skipped, and the normalized value must
//! fall in (0, 1 000 000). The first accepted value stops the whole cascade.
//!
//! The comparison-price cascade intentionally targets the crossed-out
//! elements the current-price cascade excludes, and only requires numeric
//! validity.

use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html};

use crate::currency::normalize_price;
use crate::extractors::compiled::cached_selector;

/// Sale-price selectors in priority order: site-specific classes first,
/// generic price hooks after.
const PRICE_SELECTORS: &[&str] = &[
    ".price-new",
    ".product_price",
    ".price-wrapper .price",
    ".price-wrapper span[data-price-type='finalPrice']",
    "span[data-price-type='finalPrice']",
    ".special-price .price",
    ".product-info-price .price",
    ".price",
    "[data-price]",
    "[data-product-price]",
];

/// Old/original/list price selectors in priority order.
const COMPARISON_SELECTORS: &[&str] = &[
    ".old-price",
    ".regular-price",
    ".price-wrapper-old",
    ".crossed-price",
    ".previous-price",
    ".original-price",
    ".compare-price",
    ".was-price",
    ".list-price",
    "del .price",
];

/// Class names marking a superseded (crossed-out) price container.
const STRIKETHROUGH_CLASSES: &[&str] = &["old-price", "crossed-price", "regular-price"];

/// Currency markers for the catch-all scan. A broad heuristic kept as the
/// lowest-priority strategy; the 50-character guard keeps it from latching
/// onto whole paragraphs.
static CURRENCY_MARKERS: Lazy<AhoCorasick> =
    Lazy::new(|| AhoCorasick::new(["zł", " PLN", "złotych"]).unwrap());

/// Markers accepted inside `<del>` elements for the comparison cascade.
static DEL_MARKERS: Lazy<AhoCorasick> = Lazy::new(|| AhoCorasick::new(["zł", "PLN"]).unwrap());

/// Raw concatenated text of an element, trimmed but not re-spaced: price
/// fragments split across child nodes must stay contiguous ("49" "," "90").
fn raw_text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// True when the element is, or sits inside, a strikethrough/old-price
/// container. This keeps a crossed-out original price from being mistaken
/// for the current one.
fn in_strikethrough(el: ElementRef<'_>) -> bool {
    if marks_strikethrough(el) {
        return true;
    }
    el.ancestors()
        .filter_map(ElementRef::wrap)
        .any(marks_strikethrough)
}

fn marks_strikethrough(el: ElementRef<'_>) -> bool {
    if el.value().name().eq_ignore_ascii_case("del") {
        return true;
    }
    el.value()
        .classes()
        .any(|class| STRIKETHROUGH_CLASSES.contains(&class))
}

/// Candidate filter shared by every current-price strategy.
fn accept_current_price(el: ElementRef<'_>) -> Option<f64> {
    let text = raw_text(el);
    if text.is_empty() || text.chars().count() > 50 {
        return None;
    }
    if in_strikethrough(el) {
        return None;
    }
    let value = normalize_price(&text)?;
    (value > 0.0 && value < 1_000_000.0).then_some(value)
}

/// Extract the current/sale price via the selector cascade.
///
/// Returns `None` when every strategy misses; the caller then falls back to
/// embedded structured data.
pub fn extract_price(doc: &Html) -> Option<f64> {
    for sel_str in PRICE_SELECTORS {
        let Some(sel) = cached_selector(sel_str) else {
            continue;
        };
        for el in doc.select(&sel) {
            if let Some(value) = accept_current_price(el) {
                return Some(value);
            }
        }
    }

    // Last resort: any element whose text carries a currency marker.
    let universal = cached_selector("*")?;
    for el in doc.select(&universal) {
        let text = el.text().collect::<String>();
        if !CURRENCY_MARKERS.is_match(&text) {
            continue;
        }
        if let Some(value) = accept_current_price(el) {
            return Some(value);
        }
    }

    None
}

/// Extract the pre-discount/comparison price.
///
/// No strikethrough exclusion and no range constraint: these selectors
/// target the crossed-out elements on purpose, and any numeric value counts.
pub fn extract_comparison_price(doc: &Html) -> Option<f64> {
    for sel_str in COMPARISON_SELECTORS {
        let Some(sel) = cached_selector(sel_str) else {
            continue;
        };
        for el in doc.select(&sel) {
            if let Some(value) = normalize_price(&raw_text(el)) {
                return Some(value);
            }
        }
    }

    // <del> elements carrying a currency marker.
    let del = cached_selector("del")?;
    for el in doc.select(&del) {
        let text = raw_text(el);
        if !DEL_MARKERS.is_match(&text) {
            continue;
        }
        if let Some(value) = normalize_price(&text) {
            return Some(value);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn picks_sale_price_class_first() {
        let doc = Html::parse_document(
            r#"<html><body>
                 <span class="price">199,00 zł</span>
                 <span class="price-new">149,00 zł</span>
               </body></html>"#,
        );
        // .price-new precedes .price in the cascade even though .price comes
        // first in the document.
        assert_eq!(extract_price(&doc), Some(149.0));
    }

    #[test]
    fn skips_crossed_out_price() {
        let doc = Html::parse_document(
            r#"<html><body>
                 <del><span class="price">99,99 zł</span></del>
                 <span class="price">49.99</span>
               </body></html>"#,
        );
        assert_eq!(extract_price(&doc), Some(49.99));
    }

    #[test]
    fn skips_old_price_container_class() {
        let doc = Html::parse_document(
            r#"<html><body>
                 <div class="old-price"><span class="price">300,00 zł</span></div>
                 <div class="special-price"><span class="price">250,00 zł</span></div>
               </body></html>"#,
        );
        assert_eq!(extract_price(&doc), Some(250.0));
    }

    #[test]
    fn rejects_out_of_range_and_continues() {
        let doc = Html::parse_document(
            r#"<html><body>
                 <span class="price">0</span>
                 <span class="price">1500000</span>
                 <span class="price">899,00 zł</span>
               </body></html>"#,
        );
        assert_eq!(extract_price(&doc), Some(899.0));
    }

    #[test]
    fn skips_overlong_text_blocks() {
        let doc = Html::parse_document(
            r#"<html><body>
                 <div class="price">Promocja tylko dzisiaj! Kup teraz a oszczędzisz aż 100 zł na tym produkcie</div>
                 <span class="price">59,99 zł</span>
               </body></html>"#,
        );
        assert_eq!(extract_price(&doc), Some(59.99));
    }

    #[test]
    fn marker_scan_is_last_resort() {
        let doc = Html::parse_document(
            r#"<html><body><p>Cena: <b>123,45 zł</b></p></body></html>"#,
        );
        // No price-class selector matches; the catch-all marker scan finds
        // the <b> element (its parent <p> text also matches but normalizes
        // to the same value).
        assert_eq!(extract_price(&doc), Some(123.45));
    }

    #[test]
    fn no_price_anywhere_is_none() {
        let doc = Html::parse_document("<html><body><p>opis produktu</p></body></html>");
        assert_eq!(extract_price(&doc), None);
    }

    #[test]
    fn comparison_price_reads_crossed_out_value() {
        let doc = Html::parse_document(
            r#"<html><body>
                 <span class="price">49,99 zł</span>
                 <div class="old-price">99,99 zł</div>
               </body></html>"#,
        );
        assert_eq!(extract_comparison_price(&doc), Some(99.99));
    }

    #[test]
    fn comparison_price_from_del_with_marker() {
        let doc = Html::parse_document(
            r#"<html><body>
                 <del>1 299,00 zł</del>
                 <span class="price">999,00 zł</span>
               </body></html>"#,
        );
        assert_eq!(extract_comparison_price(&doc), Some(1299.0));
    }

    #[test]
    fn comparison_price_has_no_upper_bound() {
        let doc = Html::parse_document(
            r#"<html><body><div class="list-price">2 500 000 zł</div></body></html>"#,
        );
        assert_eq!(extract_comparison_price(&doc), Some(2500000.0));
    }

    #[test]
    fn comparison_price_absent_without_old_price_markup() {
        let doc = Html::parse_document(
            r#"<html><body><span class="price">49,99 zł</span></body></html>"#,
        );
        assert_eq!(extract_comparison_price(&doc), None);
    }
}
