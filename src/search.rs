use regex::Regex;
use serde::Serialize;

use crate::document::Document;
use crate::store::DocumentStore;

/// Results returned when the caller does not specify a limit
pub const DEFAULT_LIMIT: usize = 5;

/// Terms at or below this length are ignored by the scorer
const MIN_TERM_LEN: usize = 2;

/// A document paired with its relevance score for one query
#[derive(Debug, Serialize)]
pub struct SearchResult<'a> {
    pub document: &'a Document,
    pub relevance_score: u32,
}

/// Per-term matcher compiled once per query
struct TermMatcher<'q> {
    term: &'q str,
    word: Option<Regex>,
}

/// Score every stored document against the query and return the top
/// `limit` non-zero matches, highest score first.
///
/// Matching is case-insensitive. An empty or whitespace-only query matches
/// nothing. Ties keep the store's insertion order (stable sort).
pub fn search<'a>(store: &'a DocumentStore, query: &str, limit: usize) -> Vec<SearchResult<'a>> {
    let query_lower = query.to_lowercase();
    if query_lower.trim().is_empty() {
        return Vec::new();
    }

    let matchers: Vec<TermMatcher> = query_lower
        .split_whitespace()
        .filter(|term| term.chars().count() > MIN_TERM_LEN)
        .map(|term| TermMatcher {
            term,
            word: Regex::new(&format!(r"\b{}\b", regex::escape(term))).ok(),
        })
        .collect();

    let mut results: Vec<SearchResult> = store
        .all()
        .iter()
        .filter_map(|document| {
            let relevance_score = score_document(document, &query_lower, &matchers);
            (relevance_score > 0).then_some(SearchResult {
                document,
                relevance_score,
            })
        })
        .collect();

    // sort_by is stable, so equal scores keep insertion order
    results.sort_by(|a, b| b.relevance_score.cmp(&a.relevance_score));
    results.truncate(limit);
    results
}

fn score_document(document: &Document, query_lower: &str, matchers: &[TermMatcher]) -> u32 {
    let content = document.content.to_lowercase();
    let title = document.title.to_lowercase();

    let mut score = 0;

    // Full-phrase matches are weighted above any single term
    if content.contains(query_lower) {
        score += 10;
    }
    if title.contains(query_lower) {
        score += 15;
    }

    for matcher in matchers {
        if content.contains(matcher.term) {
            score += 3;
        }
        if title.contains(matcher.term) {
            score += 5;
        }
        if let Some(word) = &matcher.word {
            if word.is_match(&content) {
                score += 2;
            }
            if word.is_match(&title) {
                score += 3;
            }
        }
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;

    fn store_with(docs: &[(&str, &str, &str)]) -> DocumentStore {
        let mut store = DocumentStore::new();
        for (id, title, content) in docs {
            store
                .append(Document::new(
                    id.to_string(),
                    title.to_string(),
                    content.to_string(),
                    format!("https://docs.example.com/{}", id),
                ))
                .unwrap();
        }
        store
    }

    #[test]
    fn test_content_substring_and_word_bonus() {
        let store = store_with(&[(
            "getting-started",
            "Getting Started",
            "Install the SDK and run quickstart",
        )]);

        let results = search(&store, "quickstart", DEFAULT_LIMIT);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].document.id, "getting-started");
        // +3 content substring, +10 phrase in content, +2 whole word
        assert!(results[0].relevance_score >= 5);
        assert_eq!(results[0].relevance_score, 15);
    }

    #[test]
    fn test_title_match_outranks_content_match() {
        let store = store_with(&[
            ("a", "Other Page", "All about webhooks here"),
            ("b", "Webhooks Guide", "Event delivery details"),
        ]);

        let results = search(&store, "webhooks", DEFAULT_LIMIT);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].document.id, "b");
        assert!(results[0].relevance_score > results[1].relevance_score);
    }

    #[test]
    fn test_no_zero_score_results() {
        let store = store_with(&[
            ("a", "Alpha", "first page"),
            ("b", "Beta", "second page"),
        ]);

        let results = search(&store, "zzz-nomatch", 5);
        assert!(results.is_empty());
    }

    #[test]
    fn test_limit_and_descending_order() {
        let store = store_with(&[
            ("only-content", "Misc", "tokens appear in content"),
            ("in-title", "About Tokens", "other text"),
            ("both", "Tokens", "tokens everywhere tokens"),
            ("unrelated", "Nope", "nothing relevant"),
        ]);

        let results = search(&store, "tokens", 2);
        assert_eq!(results.len(), 2);
        assert!(results[0].relevance_score >= results[1].relevance_score);

        let all = search(&store, "tokens", 10);
        assert_eq!(all.len(), 3);
        for pair in all.windows(2) {
            assert!(pair[0].relevance_score >= pair[1].relevance_score);
        }
    }

    #[test]
    fn test_zero_limit_is_valid_and_empty() {
        let store = store_with(&[("a", "Tokens", "tokens")]);
        assert!(search(&store, "tokens", 0).is_empty());
    }

    #[test]
    fn test_empty_query_matches_nothing() {
        let store = store_with(&[("a", "Alpha", "first page")]);
        assert!(search(&store, "", DEFAULT_LIMIT).is_empty());
        assert!(search(&store, "   \t", DEFAULT_LIMIT).is_empty());
    }

    #[test]
    fn test_short_terms_ignored() {
        let store = store_with(&[("a", "Go On", "to do it")]);
        // Every term is <= 2 chars; only the full-phrase checks can score,
        // and the phrase "to it" appears in neither field
        assert!(search(&store, "to it", DEFAULT_LIMIT).is_empty());
    }

    #[test]
    fn test_multi_term_scoring_accumulates() {
        let store = store_with(&[(
            "install",
            "Install Guide",
            "Run the install script to set up the toolchain",
        )]);

        let results = search(&store, "install toolchain", DEFAULT_LIMIT);
        assert_eq!(results.len(), 1);
        // install: content +3, title +5, word in content +2, word in title +3
        // toolchain: content +3, word in content +2
        assert_eq!(results[0].relevance_score, 18);
    }

    #[test]
    fn test_case_insensitive() {
        let store = store_with(&[("a", "Webhooks", "EVENT delivery")]);
        let results = search(&store, "WEBHOOKS event", DEFAULT_LIMIT);
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn test_ties_keep_insertion_order() {
        let store = store_with(&[
            ("first", "Same Title Tokens", "identical"),
            ("second", "Same Title Tokens", "identical"),
        ]);
        let results = search(&store, "tokens", DEFAULT_LIMIT);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].document.id, "first");
        assert_eq!(results[1].document.id, "second");
    }
}
