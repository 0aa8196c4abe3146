// ABOUTME: The main Client struct wiring fetch, parse and the field extraction cascades.
// ABOUTME: Provides async scrape() and scrape_html() returning a best-effort ScrapeResult.

use scraper::Html;
use tracing::{debug, info};
use url::Url;

use crate::error::ScrapeError;
use crate::extractors::{fields, price, structured};
use crate::options::{ClientBuilder, Options};
use crate::resource::{fetch, FetchOptions};
use crate::result::ScrapeResult;

/// The scraping client for product pages.
pub struct Client {
    opts: Options,
    http_client: reqwest::Client,
}

impl Client {
    /// Create a new ClientBuilder for configuring the client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a new Client with the given options.
    pub fn new(opts: Options) -> Self {
        let http_client = opts.http_client.clone().unwrap_or_else(|| {
            reqwest::Client::builder()
                .user_agent(&opts.user_agent)
                .timeout(opts.timeout)
                .redirect(reqwest::redirect::Policy::limited(5))
                .cookie_store(true)
                .gzip(true)
                .brotli(true)
                .deflate(true)
                .build()
                .expect("failed to build HTTP client")
        });

        Self { opts, http_client }
    }

    /// Scrape a product page at the given URL.
    ///
    /// Terminal failures are limited to URL validation and the fetch itself
    /// (network error, timeout, SSRF rejection). Once HTML is in hand the
    /// result is always `Ok`: fields the page does not expose stay empty,
    /// and a completely unrecognized page yields an empty result.
    pub async fn scrape(&self, url: &str) -> Result<ScrapeResult, ScrapeError> {
        if url.is_empty() {
            return Err(ScrapeError::invalid_url(url, "Scrape", None));
        }
        let requested = Url::parse(url).map_err(|_| {
            ScrapeError::invalid_url(url, "Scrape", Some(anyhow::anyhow!("malformed URL")))
        })?;

        let fetch_opts = FetchOptions {
            headers: self.opts.headers.clone(),
            allow_private_networks: self.opts.allow_private_networks,
        };

        let fetch_result = fetch(&self.http_client, url, &fetch_opts).await?;
        let html = fetch_result.text();

        // Redirects may have moved us; extract relative to where we landed.
        let page_url = Url::parse(&fetch_result.final_url).unwrap_or(requested);

        let result = extract(&html, &page_url);
        info!(
            url = %page_url,
            title_found = !result.title.is_empty(),
            price_found = result.has_price(),
            "scraped product page"
        );
        Ok(result)
    }

    /// Scrape caller-supplied HTML, using the given URL for context
    /// (domain, relative-image resolution). No network access.
    pub async fn scrape_html(&self, html: &str, url: &str) -> Result<ScrapeResult, ScrapeError> {
        if html.is_empty() {
            return Err(ScrapeError::invalid_url(
                url,
                "ScrapeHTML",
                Some(anyhow::anyhow!("empty HTML")),
            ));
        }
        if url.is_empty() {
            return Err(ScrapeError::invalid_url(url, "ScrapeHTML", None));
        }
        let page_url = Url::parse(url).map_err(|_| {
            ScrapeError::invalid_url(url, "ScrapeHTML", Some(anyhow::anyhow!("malformed URL")))
        })?;

        Ok(extract(html, &page_url))
    }
}

/// Run every field cascade over one parsed document and assemble the result.
///
/// The extractors are independent: each degrades to an empty/absent value on
/// its own, and no strategy failure can abort another field's cascade.
fn extract(html: &str, page_url: &Url) -> ScrapeResult {
    let doc = Html::parse_document(html);

    let title = fields::extract_title(&doc).unwrap_or_default();
    let description = fields::extract_description(&doc).unwrap_or_default();
    let image_url = fields::extract_image(&doc, page_url);

    let price = price::extract_price(&doc)
        .or_else(|| structured::price_from_structured_data(&doc));
    let comparison_price = price::extract_comparison_price(&doc);

    debug!(?price, ?comparison_price, "price cascades finished");

    let domain = page_url
        .host_str()
        .map(|h| h.to_lowercase())
        .unwrap_or_default();

    ScrapeResult {
        url: page_url.to_string(),
        domain,
        title,
        price,
        comparison_price,
        image_url,
        description,
    }
}
