//! Blog post retrieval and filtering.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::BlogPost;
use crate::domain::repositories::{BlogFilter, BlogRepository};
use crate::error::AppError;

/// Read-only access to published blog posts.
pub struct BlogService {
    repository: Arc<dyn BlogRepository>,
}

impl BlogService {
    /// Creates a new blog service.
    pub fn new(repository: Arc<dyn BlogRepository>) -> Self {
        Self { repository }
    }

    /// Lists posts matching the filter, in insertion order.
    ///
    /// The `limit` bound is enforced at the API boundary; by the time a
    /// filter reaches this service it is already within range.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn list_posts(&self, filter: BlogFilter) -> Result<Vec<BlogPost>, AppError> {
        self.repository.list(filter).await
    }

    /// Retrieves a post by its exact slug.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no post has this slug.
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn get_post_by_slug(&self, slug: &str) -> Result<BlogPost, AppError> {
        self.repository
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::not_found("Blog post not found", json!({ "slug": slug })))
    }
}
