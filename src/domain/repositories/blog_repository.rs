//! Repository trait for blog post data access.

use crate::domain::entities::BlogPost;
use crate::error::AppError;
use async_trait::async_trait;

/// Filter applied when listing blog posts.
///
/// `category` matches exactly; `q` matches case-insensitively as a substring
/// of the title or excerpt. Both are combined with AND when present. `limit`
/// is validated at the API boundary before a filter is ever constructed.
#[derive(Debug, Clone)]
pub struct BlogFilter {
    pub category: Option<String>,
    pub q: Option<String>,
    pub limit: i64,
}

/// Repository interface for the `blog_posts` collection.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MongoBlogRepository`] - MongoDB implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BlogRepository: Send + Sync {
    /// Lists posts matching `filter` in insertion order, capped at `filter.limit`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn list(&self, filter: BlogFilter) -> Result<Vec<BlogPost>, AppError>;

    /// Finds a post by its exact slug.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<BlogPost>, AppError>;

    /// Deletes every document in the collection. Seeder-only.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn delete_all(&self) -> Result<u64, AppError>;

    /// Inserts the given posts. A no-op when `posts` is empty. Seeder-only.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn insert_many(&self, posts: &[BlogPost]) -> Result<(), AppError>;
}
