use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::Error;

/// Configuration for a documentation crawl
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlConfig {
    /// URL to start crawling from; also the same-origin prefix filter
    pub base_url: String,

    /// Hard cap on the number of documents produced
    #[serde(default = "default_max_pages")]
    pub max_pages: usize,
}

/// Default value for max_pages
fn default_max_pages() -> usize {
    50
}

impl CrawlConfig {
    /// Create a new configuration, normalizing the base URL to end with `/`
    pub fn new(base_url: &str, max_pages: usize) -> Self {
        let base_url = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{}/", base_url)
        };
        Self { base_url, max_pages }
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;
        Self::from_json(&contents)
    }

    /// Parse configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let config: Self = serde_json::from_str(json)?;
        Ok(Self::new(&config.base_url, config.max_pages))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_normalization() {
        let config = CrawlConfig::new("https://docs.example.com", 10);
        assert_eq!(config.base_url, "https://docs.example.com/");

        let config = CrawlConfig::new("https://docs.example.com/", 10);
        assert_eq!(config.base_url, "https://docs.example.com/");
    }

    #[test]
    fn test_from_json_defaults() {
        let config = CrawlConfig::from_json(r#"{"base_url": "https://docs.example.com"}"#)
            .expect("valid config");
        assert_eq!(config.base_url, "https://docs.example.com/");
        assert_eq!(config.max_pages, 50);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(CrawlConfig::from_json("not json").is_err());
    }
}
