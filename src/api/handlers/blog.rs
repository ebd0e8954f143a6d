//! Handlers for blog endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use validator::Validate;

use crate::api::dto::BlogListQuery;
use crate::domain::entities::BlogPost;
use crate::error::AppError;
use crate::state::AppState;

/// Lists blog posts with optional filtering.
///
/// # Endpoint
///
/// `GET /api/blog?category=&q=&limit=`
///
/// - `category` - exact match
/// - `q` - case-insensitive substring match against title or excerpt
/// - `limit` - result cap, default 20, rejected above 100
///
/// # Errors
///
/// Returns 422 Unprocessable Entity when `limit` is out of range, before any
/// store access.
pub async fn list_blog_posts_handler(
    State(state): State<AppState>,
    Query(query): Query<BlogListQuery>,
) -> Result<Json<Vec<BlogPost>>, AppError> {
    query.validate()?;

    let posts = state.blog_service.list_posts(query.into()).await?;
    Ok(Json(posts))
}

/// Retrieves a single blog post by slug.
///
/// # Endpoint
///
/// `GET /api/blog/{slug}`
///
/// # Errors
///
/// Returns 404 Not Found if no post has the given slug.
pub async fn blog_post_by_slug_handler(
    Path(slug): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<BlogPost>, AppError> {
    let post = state.blog_service.get_post_by_slug(&slug).await?;
    Ok(Json(post))
}
