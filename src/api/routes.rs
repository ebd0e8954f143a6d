//! API route configuration.

use crate::api::handlers::{
    blog_post_by_slug_handler, create_contact_handler, list_blog_posts_handler, list_services_handler,
    root_handler, service_by_slug_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All API routes, mounted under the `/api` prefix by the top-level router.
///
/// # Endpoints
///
/// - `GET  /`                - Liveness/identity message
/// - `GET  /services`        - List all service offerings (≤100)
/// - `GET  /services/{slug}` - Single service by slug
/// - `GET  /blog`            - List blog posts with optional filters
/// - `GET  /blog/{slug}`     - Single blog post by slug
/// - `POST /contact`         - Submit a contact-form lead
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root_handler))
        .route("/services", get(list_services_handler))
        .route("/services/{slug}", get(service_by_slug_handler))
        .route("/blog", get(list_blog_posts_handler))
        .route("/blog/{slug}", get(blog_post_by_slug_handler))
        .route("/contact", post(create_contact_handler))
}
