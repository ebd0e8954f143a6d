//! Handler for the API root endpoint.

use axum::Json;
use serde::Serialize;

/// Fixed identity message returned by the root endpoint.
pub const API_MESSAGE: &str = "Veteran Nexus API";

/// JSON body of the root response.
#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: String,
}

/// Returns a fixed liveness/identity message.
///
/// # Endpoint
///
/// `GET /api/`
///
/// Used for health and sanity checks only; touches no state.
pub async fn root_handler() -> Json<RootResponse> {
    Json(RootResponse {
        message: API_MESSAGE.to_string(),
    })
}
