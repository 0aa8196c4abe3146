// ABOUTME: Field extraction cascades for product pages.
// ABOUTME: Title/description/image selectors, price cascades and the structured-data fallback.

//! Field extraction.
//!
//! Every extractor is an ordered cascade evaluated first-match-wins: the
//! first strategy yielding a non-empty, valid value terminates the cascade,
//! and a failing strategy (invalid selector, malformed structured data) is
//! absorbed as a miss rather than an error. All extractors run independently
//! over the same parsed document.
//!
//! Submodules:
//! - `compiled`: shared compiled-selector cache.
//! - `fields`: title, description and image cascades.
//! - `price`: current/comparison price cascades with strikethrough exclusion.
//! - `structured`: JSON-LD product-schema price fallback.

pub mod compiled;
pub mod fields;
pub mod price;
pub mod structured;
