//! Core data models and response envelopes.
//!
//! These types mirror the store's row shapes exactly; the serialized field
//! names (`uri`, `title`, `pubdate`, `id`) are part of the wire contract
//! and never change.

use serde::{Deserialize, Serialize};

/// A single article as returned by the paginated article queries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub uri: String,
    pub title: String,
    /// Publication time in epoch seconds.
    pub pubdate: i64,
}

/// A feed source a user can follow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Source {
    pub uri: String,
    pub title: String,
    pub id: i64,
}

/// Per-request wrapper for article listings. `results` is always present,
/// possibly empty, in store-returned order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticlesResponse {
    pub results: Vec<Article>,
}

/// Per-request wrapper for source listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourcesResponse {
    pub results: Vec<Source>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_field_names() {
        let article = Article {
            uri: "https://example.org/a/1".to_string(),
            title: "One".to_string(),
            pubdate: 1700000000,
        };
        let json = serde_json::to_value(&article).unwrap();
        assert_eq!(json["uri"], "https://example.org/a/1");
        assert_eq!(json["title"], "One");
        assert_eq!(json["pubdate"], 1700000000i64);
    }

    #[test]
    fn test_source_field_names() {
        let source = Source {
            uri: "https://example.org/feed.xml".to_string(),
            title: "Example".to_string(),
            id: 7,
        };
        let json = serde_json::to_value(&source).unwrap();
        assert_eq!(json["uri"], "https://example.org/feed.xml");
        assert_eq!(json["title"], "Example");
        assert_eq!(json["id"], 7);
    }

    #[test]
    fn test_empty_results_is_array_not_null() {
        let response = ArticlesResponse { results: vec![] };
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"results":[]}"#);
    }

    #[test]
    fn test_envelope_round_trip_preserves_order() {
        let response = ArticlesResponse {
            results: vec![
                Article {
                    uri: "u1".into(),
                    title: "t1".into(),
                    pubdate: 3,
                },
                Article {
                    uri: "u2".into(),
                    title: "t2".into(),
                    pubdate: 1,
                },
            ],
        };
        let json = serde_json::to_string(&response).unwrap();
        let parsed: ArticlesResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.results, response.results);
    }
}
