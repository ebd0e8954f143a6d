//! Query DTO for blog listing.

use serde::Deserialize;
use validator::Validate;

use crate::domain::repositories::BlogFilter;

fn default_limit() -> i64 {
    20
}

/// Query parameters for `GET /api/blog`.
///
/// `limit` defaults to 20 and must stay within 1..=100; out-of-range values
/// are rejected with a 422 rather than silently clamped.
#[derive(Debug, Deserialize, Validate)]
pub struct BlogListQuery {
    /// Exact category match.
    pub category: Option<String>,

    /// Case-insensitive substring match against title or excerpt.
    pub q: Option<String>,

    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = 100, message = "limit must be between 1 and 100"))]
    pub limit: i64,
}

impl From<BlogListQuery> for BlogFilter {
    fn from(query: BlogListQuery) -> Self {
        BlogFilter {
            category: query.category,
            q: query.q,
            limit: query.limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(limit: i64) -> BlogListQuery {
        BlogListQuery {
            category: None,
            q: None,
            limit,
        }
    }

    #[test]
    fn test_limit_bounds() {
        assert!(query(1).validate().is_ok());
        assert!(query(20).validate().is_ok());
        assert!(query(100).validate().is_ok());

        assert!(query(0).validate().is_err());
        assert!(query(101).validate().is_err());
    }

    #[test]
    fn test_limit_defaults_to_20() {
        let parsed: BlogListQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed.limit, 20);
        assert!(parsed.category.is_none());
        assert!(parsed.q.is_none());
    }
}
