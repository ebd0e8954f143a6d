//! CORS middleware built from the configured origin allow-list.

use axum::http::{HeaderValue, Method, header};
use tower_http::cors::{Any, CorsLayer};

/// Creates a CORS layer from the configured origins.
///
/// A `*` entry allows any origin without credentials. Otherwise only the
/// listed origins are allowed, with credentials, restricted to the methods
/// the API actually serves. Origins that fail to parse as header values are
/// skipped with a warning.
pub fn layer(origins: &[String]) -> CorsLayer {
    if origins.iter().any(|o| o == "*") {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin, "Skipping unparseable CORS origin");
                None
            }
        })
        .collect();

    // Credentialed CORS forbids wildcards, so methods and headers are
    // enumerated explicitly here.
    CorsLayer::new()
        .allow_origin(allowed)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .allow_credentials(true)
}
