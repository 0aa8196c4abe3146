// ABOUTME: Main library entry point for the okazje product-page scraping engine.
// ABOUTME: Re-exports the public API: Client, ClientBuilder, ScrapeResult, ScrapeError, DealDraft.

//! okazje-scrape - product metadata extraction for a deal-sharing app.
//!
//! Given a product URL, this crate fetches the page and derives a title,
//! current price, comparison (pre-discount) price, image and description
//! from arbitrary e-commerce HTML. Extraction degrades gracefully: fields
//! the page does not expose stay empty, and only URL validation and the
//! fetch itself can fail the operation.
//!
//! # Example
//!
//! ```no_run
//! use okazje_scrape::{Client, ScrapeError};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), ScrapeError> {
//!     let client = Client::builder().build();
//!     let result = client.scrape("https://shop.example/product/1").await?;
//!     println!("{}: {:?} zł", result.title, result.price);
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod currency;
pub mod deal;
pub mod error;
pub mod extractors;
pub mod options;
pub mod resource;
pub mod result;
pub mod stores;

pub use crate::client::Client;
pub use crate::currency::normalize_price;
pub use crate::deal::{DealDraft, DealDraftError};
pub use crate::error::{ErrorCode, ScrapeError};
pub use crate::options::{ClientBuilder, Options};
pub use crate::result::ScrapeResult;
pub use crate::stores::StoreDirectory;
