//! Crawl a documentation website into an in-memory index and search it.
//!
//! The crawler walks same-origin links depth-first from a base URL, extracts
//! normalized text from each page and appends one [`Document`] per URL to a
//! [`DocumentStore`]. [`search::search`] ranks stored documents against a
//! query with a deterministic heuristic; lookups by id or URL go straight to
//! the store.

pub mod config;
pub mod crawler;
pub mod document;
pub mod error;
pub mod extract;
pub mod response;
pub mod search;
pub mod store;

pub use config::CrawlConfig;
pub use crawler::{Crawler, MAX_DEPTH};
pub use document::Document;
pub use error::Error;
pub use search::{DEFAULT_LIMIT, SearchResult};
pub use store::DocumentStore;

/// Crawl a site over HTTP and return the populated store.
///
/// Convenience wrapper tying the default fetcher to a [`Crawler`] session.
pub async fn crawl_site(base_url: &str, max_pages: usize) -> Result<DocumentStore, Error> {
    let config = CrawlConfig::new(base_url, max_pages);
    let fetcher = crawler::fetch::HttpFetcher::new()?;
    let crawler = Crawler::new(config, fetcher)?;
    Ok(crawler.crawl().await)
}
