use serde::Serialize;

use crate::document::Document;
use crate::search::SearchResult;

/// Characters of content included in a search result preview
pub const PREVIEW_LEN: usize = 150;

/// Serialized answer to a search request
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse<'a> {
    pub query: &'a str,
    pub result_count: usize,
    pub results: Vec<SearchHit<'a>>,
}

/// One entry of a search response
#[derive(Debug, Serialize)]
pub struct SearchHit<'a> {
    pub title: &'a str,
    pub id: &'a str,
    pub url: &'a str,
    pub preview: String,
    pub relevance: u32,
}

impl<'a> SearchResponse<'a> {
    /// Build the response for a query from its scored results
    pub fn new(query: &'a str, results: &'a [SearchResult<'a>]) -> Self {
        let results: Vec<SearchHit> = results
            .iter()
            .map(|result| SearchHit {
                title: &result.document.title,
                id: &result.document.id,
                url: &result.document.url,
                preview: preview(&result.document.content),
                relevance: result.relevance_score,
            })
            .collect();
        Self {
            query,
            result_count: results.len(),
            results,
        }
    }
}

/// Serialized answer to a get-document request
#[derive(Debug, Serialize)]
pub struct DocumentResponse<'a> {
    pub title: &'a str,
    pub url: &'a str,
    pub content: &'a str,
}

impl<'a> DocumentResponse<'a> {
    pub fn new(document: &'a Document) -> Self {
        Self {
            title: &document.title,
            url: &document.url,
            content: &document.content,
        }
    }
}

/// First `PREVIEW_LEN` characters of the content plus an ellipsis marker
fn preview(content: &str) -> String {
    let mut preview: String = content.chars().take(PREVIEW_LEN).collect();
    preview.push_str("...");
    preview
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::DocumentStore;

    #[test]
    fn test_preview_truncates_long_content() {
        let long = "x".repeat(400);
        let result = preview(&long);
        assert_eq!(result.chars().count(), PREVIEW_LEN + 3);
        assert!(result.ends_with("..."));
    }

    #[test]
    fn test_preview_keeps_short_content() {
        assert_eq!(preview("short"), "short...");
    }

    #[test]
    fn test_search_response_shape() {
        let mut store = DocumentStore::new();
        store
            .append(Document::new(
                "guide".to_string(),
                "Guide".to_string(),
                "Guide content".to_string(),
                "https://docs.example.com/guide".to_string(),
            ))
            .unwrap();

        let results = crate::search::search(&store, "guide", 5);
        let response = SearchResponse::new("guide", &results);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["query"], "guide");
        assert_eq!(json["resultCount"], 1);
        assert_eq!(json["results"][0]["id"], "guide");
        assert_eq!(json["results"][0]["preview"], "Guide content...");
        assert!(json["results"][0]["relevance"].as_u64().unwrap() > 0);
    }
}
