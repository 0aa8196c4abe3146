// ABOUTME: Store directory mapping shop hostnames to human-readable store names.
// ABOUTME: Consulted by the deal-assembly boundary for display; never by the extraction engine.

//! Store name lookup.
//!
//! Maps hostnames to display names ("www.x-kom.pl" → "x-kom") for listing
//! and filtering deals. The builtin directory is loaded from embedded JSON.
//! Matching is substring-based against the lowercased hostname, so
//! subdomains of a known shop resolve to the same store.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use url::Url;

/// Embedded JSON mapping shop domains to display names.
const BUILTIN_STORES_JSON: &str = include_str!("../data/stores.json");

static BUILTIN: Lazy<StoreDirectory> = Lazy::new(|| {
    let entries: BTreeMap<String, String> =
        serde_json::from_str(BUILTIN_STORES_JSON).expect("failed to parse builtin store directory");
    StoreDirectory { entries }
});

/// A domain → store-name lookup table.
#[derive(Debug, Clone)]
pub struct StoreDirectory {
    entries: BTreeMap<String, String>,
}

impl StoreDirectory {
    /// The builtin directory of known shops.
    pub fn builtin() -> &'static StoreDirectory {
        &BUILTIN
    }

    /// Build a directory from explicit entries.
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Resolve the store name for a deal link. Returns `None` for invalid
    /// URLs or unknown hosts.
    pub fn detect(&self, url: &str) -> Option<&str> {
        let parsed = Url::parse(url).ok()?;
        let hostname = parsed.host_str()?.to_lowercase();
        self.entries
            .iter()
            .find(|(domain, _)| hostname.contains(&domain.to_lowercase()))
            .map(|(_, name)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn builtin_directory_loads() {
        let dir = StoreDirectory::builtin();
        assert!(!dir.is_empty());
        assert!(dir.len() >= 20);
    }

    #[test]
    fn detects_known_store() {
        let dir = StoreDirectory::builtin();
        assert_eq!(
            dir.detect("https://www.x-kom.pl/p/123-laptop.html"),
            Some("x-kom")
        );
    }

    #[test]
    fn detects_store_on_subdomain() {
        let dir = StoreDirectory::builtin();
        assert_eq!(
            dir.detect("https://promocje.mediaexpert.pl/agd"),
            Some("Media Expert")
        );
    }

    #[test]
    fn unknown_host_is_none() {
        let dir = StoreDirectory::builtin();
        assert_eq!(dir.detect("https://nieznany-sklep.example/p/1"), None);
    }

    #[test]
    fn invalid_url_is_none() {
        let dir = StoreDirectory::builtin();
        assert_eq!(dir.detect("not a url"), None);
        assert_eq!(dir.detect(""), None);
    }

    #[test]
    fn custom_entries() {
        let dir = StoreDirectory::from_entries([("sklep.example", "Sklep Przykładowy")]);
        assert_eq!(
            dir.detect("https://sklep.example/oferta"),
            Some("Sklep Przykładowy")
        );
    }
}
