//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `/api/*` - JSON API (public)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Origin allow-list from `CORS_ORIGINS`
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::state::AppState;
use axum::Router;
use tower::Layer;
use tower_http::cors::CorsLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `cors` - CORS layer built from the configured origin allow-list
pub fn app_router(state: AppState, cors: CorsLayer) -> NormalizePath<Router> {
    let router = Router::new()
        .nest("/api", api::routes::routes())
        .with_state(state)
        .layer(api::middleware::tracing::layer())
        .layer(cors);

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
