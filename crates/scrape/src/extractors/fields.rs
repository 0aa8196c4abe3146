// ABOUTME: Title, description and image extraction cascades over a parsed product page.
// ABOUTME: Fixed selector lists tried in order with meta-tag fallbacks; first non-empty match wins.

//! Field extraction cascades.
//!
//! Each field runs an ordered list of CSS selectors; the first selector
//! yielding a non-empty value wins and later entries are never consulted.
//! When the whole selector list misses, social-preview metadata (OpenGraph)
//! and generic meta tags are consulted as fallbacks.

use scraper::{ElementRef, Html};
use url::Url;

use crate::extractors::compiled::cached_selector;

/// Product title selectors in priority order: the generic heading first,
/// then common shop-template title hooks.
const TITLE_SELECTORS: &[&str] = &[
    "h1",
    "[data-testid='product-title']",
    ".product-title",
    ".product-name",
    "[itemprop='name']",
    "#title",
];

/// Title metadata fallbacks, consulted only when every selector misses.
const TITLE_META_FALLBACKS: &[&str] = &["meta[property='og:title']", "meta[name='title']"];

/// Product description selectors in priority order.
const DESCRIPTION_SELECTORS: &[&str] = &[
    "[itemprop='description']",
    ".product-description",
    "#description",
    ".description",
];

/// Description metadata fallbacks.
const DESCRIPTION_META_FALLBACKS: &[&str] = &[
    "meta[property='og:description']",
    "meta[name='description']",
];

/// Product image selectors in priority order. Social-preview metadata leads
/// because shops maintain it for link sharing; container selectors follow.
const IMAGE_SELECTORS: &[&str] = &[
    "[property='og:image']",
    "[itemprop='image']",
    ".product-image img",
    "#main-image",
    ".primary-image",
];

/// Normalizes whitespace by collapsing runs into single spaces and trimming.
pub(crate) fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Inner text of an element, whitespace-normalized.
pub(crate) fn element_text(el: ElementRef<'_>) -> String {
    normalize_whitespace(&el.text().collect::<Vec<_>>().join(" "))
}

/// Extracts the `content` attribute from the first matching meta tag.
fn meta_content(doc: &Html, selector: &str) -> Option<String> {
    let sel = cached_selector(selector)?;
    for el in doc.select(&sel) {
        if let Some(content) = el.value().attr("content") {
            let trimmed = content.trim();
            if !trimmed.is_empty() {
                return Some(trimmed.to_string());
            }
        }
    }
    None
}

/// Runs a text cascade: first selector with a non-empty normalized inner text
/// wins. Invalid selectors are skipped, never fatal.
fn first_text(doc: &Html, selectors: &[&str]) -> Option<String> {
    for sel_str in selectors {
        let Some(sel) = cached_selector(sel_str) else {
            continue;
        };
        for el in doc.select(&sel) {
            let text = element_text(el);
            if !text.is_empty() {
                return Some(text);
            }
        }
    }
    None
}

/// Runs a meta-content cascade over fallback selectors.
fn first_meta(doc: &Html, selectors: &[&str]) -> Option<String> {
    selectors.iter().find_map(|sel| meta_content(doc, sel))
}

/// Extract the product title: selector cascade, then og:title, then the
/// generic title meta tag. The value is trimmed/whitespace-normalized.
pub fn extract_title(doc: &Html) -> Option<String> {
    first_text(doc, TITLE_SELECTORS).or_else(|| first_meta(doc, TITLE_META_FALLBACKS))
}

/// Extract the product description: selector cascade, then og:description,
/// then the generic description meta tag.
pub fn extract_description(doc: &Html) -> Option<String> {
    first_text(doc, DESCRIPTION_SELECTORS).or_else(|| first_meta(doc, DESCRIPTION_META_FALLBACKS))
}

/// Extract the product image URL, resolved to an absolute URL.
///
/// The first matching element wins; its `src` attribute is preferred, with
/// `content` as the fallback (meta tags carry the URL there). A relative
/// value is resolved against the page URL. A value that cannot be resolved
/// leaves the field unset; the page markup was broken, not the pipeline.
pub fn extract_image(doc: &Html, page_url: &Url) -> Option<String> {
    for sel_str in IMAGE_SELECTORS {
        let Some(sel) = cached_selector(sel_str) else {
            continue;
        };
        if let Some(el) = doc.select(&sel).next() {
            let raw = el
                .value()
                .attr("src")
                .or_else(|| el.value().attr("content"))
                .map(str::trim)
                .filter(|v| !v.is_empty())?;
            return resolve_url(raw, page_url);
        }
    }
    None
}

/// Resolve a possibly-relative URL against the page URL.
fn resolve_url(raw: &str, base: &Url) -> Option<String> {
    match Url::parse(raw) {
        Ok(absolute) => Some(absolute.into()),
        Err(url::ParseError::RelativeUrlWithoutBase) => base.join(raw).ok().map(Into::into),
        Err(_) => None,
    }
}
