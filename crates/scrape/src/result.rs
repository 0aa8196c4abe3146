// ABOUTME: ScrapeResult struct holding product data extracted from a scraped page.
// ABOUTME: Every field degrades independently; a fully empty result is still a valid outcome.

use serde::{Deserialize, Serialize};

/// The result of scraping a product page.
///
/// Each field is populated on a best-effort basis and degrades independently:
/// a page yielding nothing at all still produces a (maximally empty) result
/// rather than an error. The struct is transient and carries no identity;
/// the deal-creation flow owns whatever it persists from it.
///
/// Serialized field names are camelCase (`comparisonPrice`, `imageUrl`) to
/// match the JSON shape the deal-creation frontend consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ScrapeResult {
    /// The scraped page URL (after redirects, when fetched over the network).
    pub url: String,
    /// Lowercased host of the scraped page.
    pub domain: String,
    /// Best-effort product name, trimmed. Empty when nothing matched.
    pub title: String,
    /// Current/sale price. Selector-derived values are restricted to (0, 1_000_000).
    pub price: Option<f64>,
    /// Pre-discount/list price; only numeric validity is required.
    pub comparison_price: Option<f64>,
    /// Product image resolved to an absolute URL.
    pub image_url: Option<String>,
    /// Best-effort product description. Empty when nothing matched.
    pub description: String,
}

impl ScrapeResult {
    /// Returns true if no field was populated at all.
    pub fn is_empty(&self) -> bool {
        self.title.is_empty()
            && self.description.is_empty()
            && self.price.is_none()
            && self.comparison_price.is_none()
            && self.image_url.is_none()
    }

    /// Returns true if a current price was extracted.
    pub fn has_price(&self) -> bool {
        self.price.is_some()
    }

    /// Returns true if an image URL was extracted.
    pub fn has_image(&self) -> bool {
        self.image_url.as_ref().map_or(false, |u| !u.is_empty())
    }

    /// Absolute savings versus the comparison price, when both prices are known
    /// and the comparison price is actually higher.
    pub fn savings(&self) -> Option<f64> {
        match (self.price, self.comparison_price) {
            (Some(price), Some(was)) if was > price => Some(was - price),
            _ => None,
        }
    }
}
