//! Book listing query parameters.

use serde::{Deserialize, Serialize};

use bookshelf_core::types::pagination::PageRequest;
use bookshelf_core::types::sorting::SortDirection;
use bookshelf_service::book::BookListQuery;

/// Query parameters for `GET /api/books`.
///
/// `page` and `limit` arrive as raw strings and are parsed leniently: an
/// unusable value falls back to its default instead of rejecting the
/// request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookListParams {
    /// Page number (1-based, default: 1).
    pub page: Option<String>,
    /// Books per page (default: 5, max: 100).
    pub limit: Option<String>,
    /// Case-insensitive substring matched against title or author.
    #[serde(default)]
    pub search: String,
    /// Case-insensitive substring matched against genre.
    #[serde(default)]
    pub genre: String,
    /// Sort field (default: createdAt).
    pub sort_by: Option<String>,
    /// Sort direction: "asc" or "desc" (default: desc).
    pub sort_order: Option<String>,
}

/// Takes the leading digits of the value; anything unusable (or zero)
/// falls back to the default.
fn parse_or(value: Option<&str>, default: u64) -> u64 {
    let Some(value) = value else {
        return default;
    };
    let digits: String = value
        .trim()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().ok().filter(|&n| n > 0).unwrap_or(default)
}

impl BookListParams {
    /// Converts to a service listing query.
    pub fn into_query(self) -> BookListQuery {
        let page = parse_or(self.page.as_deref(), 1);
        let limit = parse_or(self.limit.as_deref(), 5);
        BookListQuery {
            search: self.search,
            genre: self.genre,
            sort_by: self.sort_by.unwrap_or_else(|| "createdAt".to_string()),
            direction: SortDirection::from_query(self.sort_order.as_deref()),
            page: PageRequest::new(page, limit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params: BookListParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params.search, "");

        let query = params.into_query();
        assert_eq!(query.sort_by, "createdAt");
        assert_eq!(query.direction, SortDirection::Desc);
        assert_eq!(query.page.offset(), 0);
        assert_eq!(query.page.limit(), 5);
    }

    #[test]
    fn test_explicit_parameters() {
        let params: BookListParams = serde_json::from_str(
            r#"{"page": "3", "limit": "10", "search": "dune", "sortBy": "title", "sortOrder": "asc"}"#,
        )
        .unwrap();
        let query = params.into_query();
        assert_eq!(query.search, "dune");
        assert_eq!(query.sort_by, "title");
        assert_eq!(query.direction, SortDirection::Asc);
        assert_eq!(query.page.offset(), 20);
    }

    #[test]
    fn test_unusable_page_and_limit_fall_back_to_defaults() {
        let params: BookListParams =
            serde_json::from_str(r#"{"page": "abc", "limit": "-2"}"#).unwrap();
        let query = params.into_query();
        assert_eq!(query.page.page, 1);
        assert_eq!(query.page.limit(), 5);

        let params: BookListParams =
            serde_json::from_str(r#"{"page": "0", "limit": "0"}"#).unwrap();
        let query = params.into_query();
        assert_eq!(query.page.page, 1);
        assert_eq!(query.page.limit(), 5);
    }

    #[test]
    fn test_trailing_garbage_keeps_leading_digits() {
        assert_eq!(parse_or(Some("12abc"), 1), 12);
        assert_eq!(parse_or(Some(" 7 "), 1), 7);
        assert_eq!(parse_or(None, 5), 5);
    }
}
