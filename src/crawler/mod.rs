pub mod fetch;


use std::collections::HashSet;
use url::Url;

use crate::config::CrawlConfig;
use crate::document::Document;
use crate::error::Error;
use crate::extract;
use crate::store::DocumentStore;
use fetch::Fetcher;

/// Maximum link depth followed from the crawl root
pub const MAX_DEPTH: usize = 3;

/// One crawl session.
///
/// Owns its frontier state (visited set and work stack), so independent
/// crawls never interfere. Traversal is depth-first and strictly
/// sequential, one fetch in flight at a time.
pub struct Crawler<F: Fetcher> {
    config: CrawlConfig,
    base: Url,
    fetcher: F,
}

impl<F: Fetcher> Crawler<F> {
    /// Create a crawler for the configured base URL
    pub fn new(config: CrawlConfig, fetcher: F) -> Result<Self, Error> {
        let config = CrawlConfig::new(&config.base_url, config.max_pages);
        let base = Url::parse(&config.base_url)?;
        Ok(Self {
            config,
            base,
            fetcher,
        })
    }

    /// Crawl from the base URL and return the populated store.
    ///
    /// Per-URL fetch failures are logged and abandon only that branch; the
    /// crawl itself always completes with whatever was collected.
    pub async fn crawl(&self) -> DocumentStore {
        ::log::info!("Starting crawl of {}", self.config.base_url);

        let mut store = DocumentStore::new();
        let mut visited: HashSet<String> = HashSet::new();
        // LIFO work stack; children are pushed in reverse page order so the
        // first link on a page is fully crawled before its siblings
        let mut stack: Vec<(String, usize)> = vec![(self.config.base_url.clone(), 0)];

        while let Some((url, depth)) = stack.pop() {
            if store.len() >= self.config.max_pages {
                break;
            }
            if depth > MAX_DEPTH || !url.starts_with(&self.config.base_url) {
                continue;
            }
            // Mark before fetching so the URL is never queued twice
            if !visited.insert(url.clone()) {
                continue;
            }

            ::log::info!("Crawling {}", url);
            let body = match self.fetcher.fetch(&url).await {
                Ok(body) => body,
                Err(e) => {
                    ::log::warn!("Failed to fetch {}: {}", url, e);
                    continue;
                }
            };

            let page = extract::extract(&body, &url);
            let id = url_to_id(&self.config.base_url, &url);
            let doc = Document::new(id, page.title, page.content, url.clone());
            if let Err(e) = store.append(doc) {
                ::log::warn!("Skipping {}: {}", url, e);
                continue;
            }

            let links = self.resolve_links(&page.links);
            for link in links.iter().rev() {
                if !visited.contains(link) {
                    stack.push((link.clone(), depth + 1));
                }
            }
        }

        ::log::info!(
            "Completed crawl of {}. Indexed {} pages.",
            self.config.base_url,
            store.len()
        );
        store
    }

    /// Resolve raw hrefs into absolute in-scope URLs, dropping the rest
    fn resolve_links(&self, hrefs: &[String]) -> Vec<String> {
        hrefs
            .iter()
            .filter_map(|href| self.resolve_link(href))
            .collect()
    }

    /// Root-relative links resolve against the base; absolute links are kept
    /// only when already prefixed by it. Everything else (external hosts,
    /// fragments, relative paths) is dropped.
    fn resolve_link(&self, href: &str) -> Option<String> {
        if href.starts_with('/') {
            self.base.join(href).ok().map(String::from)
        } else if href.starts_with(&self.config.base_url) {
            Some(href.to_string())
        } else {
            None
        }
    }
}

/// Derive a document id from its URL relative to the crawl base.
///
/// Strips the base prefix and one trailing slash, maps every character
/// outside `[a-zA-Z0-9]` to `-` and lowercases; an empty result becomes
/// the literal id `home`. The mapping is deterministic so externally held
/// ids stay valid across crawls.
pub fn url_to_id(base_url: &str, url: &str) -> String {
    let relative = url.strip_prefix(base_url).unwrap_or(url);
    let relative = relative.strip_suffix('/').unwrap_or(relative);
    let id: String = relative
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect();
    if id.is_empty() { "home".to_string() } else { id }
}
