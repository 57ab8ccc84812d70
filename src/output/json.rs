//! JSON rendering of a search view

use chrono::Utc;
use serde::Serialize;

use crate::client::Candidate;

/// One search page as emitted by `--format json`.
///
/// Scripts get the candidates plus the view coordinates needed to rebuild
/// or continue the search, so the document stands on its own.
#[derive(Debug, Serialize)]
pub struct SearchDocument<'a> {
    pub candidates: &'a [Candidate],
    pub meta: ViewMeta<'a>,
}

/// View coordinates and provenance for a search document
#[derive(Debug, Serialize)]
pub struct ViewMeta<'a> {
    pub query: &'a str,
    pub page: u32,
    pub total_pages: u32,
    pub generated_at: String,
    pub version: String,
}

impl<'a> SearchDocument<'a> {
    pub fn new(
        query: &'a str,
        page: u32,
        total_pages: u32,
        candidates: &'a [Candidate],
    ) -> Self {
        Self {
            candidates,
            meta: ViewMeta {
                query,
                page,
                total_pages,
                generated_at: Utc::now().to_rfc3339(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        }
    }
}

/// Pretty-print a search document
pub fn format_search_json(doc: &SearchDocument<'_>) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(doc)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(id: &str) -> Candidate {
        Candidate {
            id: id.to_string(),
            name: Some("Ada".to_string()),
            email: None,
            company: None,
            location: None,
            website_url: None,
            skills: Vec::new(),
            github_url: None,
            avatar_url: None,
            profile_text: None,
        }
    }

    #[test]
    fn test_document_carries_view_coordinates() {
        let candidates = vec![candidate("c-1")];
        let doc = SearchDocument::new("golang", 2, 5, &candidates);

        assert_eq!(doc.meta.query, "golang");
        assert_eq!(doc.meta.page, 2);
        assert_eq!(doc.meta.total_pages, 5);
        assert_eq!(doc.meta.version, env!("CARGO_PKG_VERSION"));
        assert!(!doc.meta.generated_at.is_empty());
    }

    #[test]
    fn test_format_search_json_shape() {
        let candidates = vec![candidate("c-1")];
        let doc = SearchDocument::new("golang", 1, 3, &candidates);

        let result = format_search_json(&doc).unwrap();

        assert!(result.contains("\"candidates\""));
        assert!(result.contains("\"id\": \"c-1\""));
        assert!(result.contains("\"query\": \"golang\""));
        assert!(result.contains("\"total_pages\": 3"));
        assert!(result.contains("\"generated_at\""));
    }

    #[test]
    fn test_format_search_json_empty_page() {
        let doc = SearchDocument::new("nobody", 1, 0, &[]);
        let result = format_search_json(&doc).unwrap();

        assert!(result.contains("\"candidates\": []"));
        assert!(result.contains("\"total_pages\": 0"));
    }
}
