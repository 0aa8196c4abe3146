// ABOUTME: DealDraft, the record the deal-creation flow persists after a scrape.
// ABOUTME: Validates required fields; the scraped values pass through verbatim.

//! Deal assembly boundary.
//!
//! A [`DealDraft`] is what the deal-creation flow hands to the persistence
//! layer: the scraped fields plus the deal link and resolved store name.
//! The engine's output is copied verbatim (persistence must be lossless);
//! only the presence/validity rules the creation form enforces are checked
//! here. Identity (the owning user) stays with the caller.

use serde::{Deserialize, Serialize};

use crate::result::ScrapeResult;
use crate::stores::StoreDirectory;

/// Why a scrape result cannot yet be persisted as a deal.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DealDraftError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("price must be a positive finite number")]
    InvalidPrice,
}

/// A deal record ready for persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DealDraft {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub comparison_price: Option<f64>,
    pub image_url: Option<String>,
    pub link: String,
    pub store: Option<String>,
}

impl DealDraft {
    /// Assemble a draft from a scrape result and the user-supplied link.
    ///
    /// Title, description and price are required (the form pre-fills them
    /// from the scrape but the user must end up with all three); the price
    /// must be a positive finite number. The store name is resolved from the
    /// link for display purposes only.
    pub fn from_scrape(
        result: &ScrapeResult,
        link: impl Into<String>,
        stores: &StoreDirectory,
    ) -> Result<Self, DealDraftError> {
        let link = link.into();
        if link.is_empty() {
            return Err(DealDraftError::MissingField("link"));
        }
        if result.title.is_empty() {
            return Err(DealDraftError::MissingField("title"));
        }
        if result.description.is_empty() {
            return Err(DealDraftError::MissingField("description"));
        }
        let price = result.price.ok_or(DealDraftError::MissingField("price"))?;
        if !price.is_finite() || price <= 0.0 {
            return Err(DealDraftError::InvalidPrice);
        }

        let store = stores.detect(&link).map(str::to_string);

        Ok(Self {
            title: result.title.clone(),
            description: result.description.clone(),
            price,
            comparison_price: result.comparison_price,
            image_url: result.image_url.clone(),
            link,
            store,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn scraped() -> ScrapeResult {
        ScrapeResult {
            url: "https://www.x-kom.pl/p/1".to_string(),
            domain: "www.x-kom.pl".to_string(),
            title: "Laptop 14\"".to_string(),
            price: Some(2999.0),
            comparison_price: Some(3499.0),
            image_url: Some("https://cdn.x-kom.pl/p/1.jpg".to_string()),
            description: "Lekki laptop do pracy".to_string(),
        }
    }

    #[test]
    fn assembles_draft_with_store_name() {
        let draft = DealDraft::from_scrape(
            &scraped(),
            "https://www.x-kom.pl/p/1",
            StoreDirectory::builtin(),
        )
        .unwrap();

        assert_eq!(draft.title, "Laptop 14\"");
        assert_eq!(draft.price, 2999.0);
        assert_eq!(draft.comparison_price, Some(3499.0));
        assert_eq!(draft.store, Some("x-kom".to_string()));
    }

    #[test]
    fn scraped_values_pass_through_verbatim() {
        // Persisting and reloading must reproduce identical field values.
        let result = scraped();
        let draft = DealDraft::from_scrape(
            &result,
            "https://www.x-kom.pl/p/1",
            StoreDirectory::builtin(),
        )
        .unwrap();

        let json = serde_json::to_string(&draft).unwrap();
        let reloaded: DealDraft = serde_json::from_str(&json).unwrap();
        assert_eq!(reloaded, draft);
        assert_eq!(reloaded.price, result.price.unwrap());
        assert_eq!(reloaded.comparison_price, result.comparison_price);
        assert_eq!(reloaded.image_url, result.image_url);
    }

    #[test]
    fn missing_title_is_rejected() {
        let mut result = scraped();
        result.title.clear();
        let err = DealDraft::from_scrape(&result, "https://x.pl/1", StoreDirectory::builtin())
            .unwrap_err();
        assert_eq!(err, DealDraftError::MissingField("title"));
    }

    #[test]
    fn missing_price_is_rejected() {
        let mut result = scraped();
        result.price = None;
        let err = DealDraft::from_scrape(&result, "https://x.pl/1", StoreDirectory::builtin())
            .unwrap_err();
        assert_eq!(err, DealDraftError::MissingField("price"));
    }

    #[test]
    fn non_positive_price_is_rejected() {
        let mut result = scraped();
        result.price = Some(0.0);
        let err = DealDraft::from_scrape(&result, "https://x.pl/1", StoreDirectory::builtin())
            .unwrap_err();
        assert_eq!(err, DealDraftError::InvalidPrice);
    }

    #[test]
    fn unknown_store_leaves_store_unset() {
        let draft = DealDraft::from_scrape(
            &scraped(),
            "https://nieznany.example/p/1",
            StoreDirectory::builtin(),
        )
        .unwrap();
        assert_eq!(draft.store, None);
    }
}
