//! Shareable search routes
//!
//! A search view is fully described by the query parameters `q` (raw search
//! text) and `page` (1-based). Routes round-trip through the query-string
//! form so a view can be shared, bookmarked, and reconstructed.

/// Navigable search location: `q` + `page`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRoute {
    pub query: String,
    pub page: u32,
}

impl SearchRoute {
    pub fn new(query: impl Into<String>, page: u32) -> Self {
        Self {
            query: query.into(),
            page: page.max(1),
        }
    }

    /// Route with no active query
    pub fn idle() -> Self {
        Self {
            query: String::new(),
            page: 1,
        }
    }

    /// Whether this route describes the idle (no query) view
    pub fn is_idle(&self) -> bool {
        self.query.trim().is_empty()
    }

    /// Parse a query string (`q=...&page=N`), tolerating a full URL prefix.
    ///
    /// Missing `q` yields the idle route; a missing, zero, or non-numeric
    /// `page` falls back to 1. Unknown parameters are ignored.
    pub fn parse(input: &str) -> Self {
        let query_string = match input.find('?') {
            Some(idx) => &input[idx + 1..],
            None => input,
        };

        let mut query = String::new();
        let mut page = 1;

        for pair in query_string.split('&') {
            let mut parts = pair.splitn(2, '=');
            let key = parts.next().unwrap_or("");
            let value = parts.next().unwrap_or("");

            match key {
                "q" => {
                    query = urlencoding::decode(value)
                        .map(|decoded| decoded.into_owned())
                        .unwrap_or_else(|_| value.to_string());
                }
                "page" => {
                    page = value.parse::<u32>().ok().filter(|p| *p >= 1).unwrap_or(1);
                }
                _ => {}
            }
        }

        Self { query, page }
    }

    /// Encode back into a query string
    pub fn to_query_string(&self) -> String {
        format!("q={}&page={}", urlencoding::encode(&self.query), self.page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let route = SearchRoute::parse("q=golang&page=2");
        assert_eq!(route.query, "golang");
        assert_eq!(route.page, 2);
    }

    #[test]
    fn test_parse_full_url() {
        let route = SearchRoute::parse("https://scout.example.com/?q=rust&page=3");
        assert_eq!(route.query, "rust");
        assert_eq!(route.page, 3);
    }

    #[test]
    fn test_parse_missing_query_is_idle() {
        assert!(SearchRoute::parse("page=4").is_idle());
        assert!(SearchRoute::parse("").is_idle());
    }

    #[test]
    fn test_parse_bad_page_defaults_to_one() {
        assert_eq!(SearchRoute::parse("q=x&page=abc").page, 1);
        assert_eq!(SearchRoute::parse("q=x&page=0").page, 1);
        assert_eq!(SearchRoute::parse("q=x").page, 1);
    }

    #[test]
    fn test_round_trip_with_special_characters() {
        let route = SearchRoute::new("c++ & \"embedded\" 开发", 7);
        let parsed = SearchRoute::parse(&route.to_query_string());
        assert_eq!(parsed, route);
    }

    #[test]
    fn test_unknown_parameters_ignored() {
        let route = SearchRoute::parse("utm_source=mail&q=golang&page=2&theme=dark");
        assert_eq!(route.query, "golang");
        assert_eq!(route.page, 2);
    }

    #[test]
    fn test_new_clamps_page_to_one() {
        assert_eq!(SearchRoute::new("x", 0).page, 1);
    }
}
