// ABOUTME: Configuration options for the scraping client including Options and ClientBuilder.
// ABOUTME: ClientBuilder provides a fluent API for constructing Client instances with custom settings.

use std::collections::HashMap;
use std::time::Duration;

use crate::client::Client;

/// Configuration options for the scraping client.
#[derive(Debug, Clone)]
pub struct Options {
    /// Total time budget for a fetch; the in-flight request is aborted when it expires.
    pub timeout: Duration,
    pub user_agent: String,
    pub allow_private_networks: bool,
    pub http_client: Option<reqwest::Client>,
    pub headers: HashMap<String, String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(5),
            user_agent: "okazje-scrape/0.1".to_string(),
            allow_private_networks: false,
            http_client: None,
            headers: HashMap::new(),
        }
    }
}

/// Builder for constructing Client instances with custom configuration.
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    opts: Options,
}

impl ClientBuilder {
    /// Create a new ClientBuilder with default options.
    pub fn new() -> Self {
        Self {
            opts: Options::default(),
        }
    }

    /// Set the fetch timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.opts.timeout = timeout;
        self
    }

    /// Set the User-Agent header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.opts.user_agent = user_agent.into();
        self
    }

    /// Allow or disallow requests to private networks.
    pub fn allow_private_networks(mut self, allow: bool) -> Self {
        self.opts.allow_private_networks = allow;
        self
    }

    /// Use a custom HTTP client.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.opts.http_client = Some(client);
        self
    }

    /// Add a custom header to all requests.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.opts.headers.insert(key.into(), value.into());
        self
    }

    /// Build the Client with the configured options.
    pub fn build(self) -> Client {
        Client::new(self.opts)
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_timeout_is_five_seconds() {
        let opts = Options::default();
        assert_eq!(opts.timeout, Duration::from_secs(5));
        assert!(!opts.allow_private_networks);
    }

    #[test]
    fn builder_overrides_options() {
        let builder = ClientBuilder::new()
            .timeout(Duration::from_millis(250))
            .user_agent("test-agent")
            .allow_private_networks(true)
            .header("Accept-Language", "pl-PL");
        assert_eq!(builder.opts.timeout, Duration::from_millis(250));
        assert_eq!(builder.opts.user_agent, "test-agent");
        assert!(builder.opts.allow_private_networks);
        assert_eq!(
            builder.opts.headers.get("Accept-Language").map(String::as_str),
            Some("pl-PL")
        );
    }
}
