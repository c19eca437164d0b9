//! Offset/limit pagination types.
//!
//! All admin listing endpoints accept `offset` and `show` query parameters
//! and respond with a `{ items, count }` envelope, where `count` is the total
//! number of matching rows (not the page size).

use serde::{Deserialize, Serialize};

/// Default page size when `show` is omitted.
pub const DEFAULT_PAGE_SIZE: i64 = 25;

/// Upper bound on `show` to keep result sets bounded.
pub const MAX_PAGE_SIZE: i64 = 100;

/// Query parameters for paginated listings.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PaginationArgs {
    /// Number of rows to skip.
    #[serde(default)]
    pub offset: i64,
    /// Number of rows to return.
    pub show: Option<i64>,
}

impl Default for PaginationArgs {
    fn default() -> Self {
        Self {
            offset: 0,
            show: None,
        }
    }
}

impl PaginationArgs {
    /// Effective offset, clamped to be non-negative.
    pub fn offset(&self) -> i64 {
        self.offset.max(0)
    }

    /// Effective page size, clamped to `1..=MAX_PAGE_SIZE`.
    pub fn limit(&self) -> i64 {
        self.show
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE)
    }
}

/// Response envelope for paginated listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    /// Total number of matching rows.
    pub count: i64,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, count: i64) -> Self {
        Self { items, count }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = PaginationArgs::default();
        assert_eq!(args.offset(), 0);
        assert_eq!(args.limit(), DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_limit_clamped_to_max() {
        let args = PaginationArgs {
            offset: 0,
            show: Some(10_000),
        };
        assert_eq!(args.limit(), MAX_PAGE_SIZE);
    }

    #[test]
    fn test_limit_clamped_to_min() {
        let args = PaginationArgs {
            offset: 0,
            show: Some(0),
        };
        assert_eq!(args.limit(), 1);
    }

    #[test]
    fn test_negative_offset_clamped() {
        let args = PaginationArgs {
            offset: -5,
            show: None,
        };
        assert_eq!(args.offset(), 0);
    }

    #[test]
    fn test_deserialize_from_query() {
        let args: PaginationArgs = serde_json::from_str(r#"{"offset": 50, "show": 25}"#).unwrap();
        assert_eq!(args.offset(), 50);
        assert_eq!(args.limit(), 25);
    }

    #[test]
    fn test_envelope_serialization() {
        let page = Paginated::new(vec![1, 2, 3], 10);
        let json = serde_json::to_string(&page).unwrap();
        assert!(json.contains("\"items\":[1,2,3]"));
        assert!(json.contains("\"count\":10"));
    }
}
