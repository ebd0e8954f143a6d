//! Handlers for service catalog endpoints.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::domain::entities::Service;
use crate::error::AppError;
use crate::state::AppState;

/// Lists all service offerings.
///
/// # Endpoint
///
/// `GET /api/services`
///
/// Returns every document in the catalog, capped at 100, in insertion order.
/// No filtering is supported.
pub async fn list_services_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Service>>, AppError> {
    let services = state.catalog_service.list_services().await?;
    Ok(Json(services))
}

/// Retrieves a single service by slug.
///
/// # Endpoint
///
/// `GET /api/services/{slug}`
///
/// # Errors
///
/// Returns 404 Not Found if no service has the given slug.
pub async fn service_by_slug_handler(
    Path(slug): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Service>, AppError> {
    let service = state.catalog_service.get_service_by_slug(&slug).await?;
    Ok(Json(service))
}
