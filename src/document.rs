use serde::{Deserialize, Serialize};

/// Normalized representation of one crawled page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Identifier derived from the URL relative to the crawl base
    pub id: String,

    /// Normalized page title (may be empty)
    pub title: String,

    /// Normalized, whitespace-collapsed body text
    pub content: String,

    /// Absolute URL of the page
    pub url: String,

    /// Optional labels (reserved, no behavior attached)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl Document {
    /// Create a new document with no tags
    pub fn new(id: String, title: String, content: String, url: String) -> Self {
        Self {
            id,
            title,
            content,
            url,
            tags: None,
        }
    }
}
