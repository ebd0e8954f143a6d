//! HTTP server initialization and runtime setup.
//!
//! Handles the MongoDB connection, state construction, and Axum server
//! lifecycle.

use crate::api::middleware::cors;
use crate::application::services::{BlogService, CatalogService, ContactService};
use crate::config::Config;
use crate::infrastructure::persistence::{
    MongoBlogRepository, MongoContactRepository, MongoServiceRepository,
};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use mongodb::Client;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - MongoDB client (connection pooling is the driver's concern)
/// - Repositories and application services
/// - Axum HTTP server with tracing and CORS layers
///
/// # Errors
///
/// Returns an error if:
/// - The MongoDB connection string is rejected
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let client = Client::with_uri_str(&config.mongo_url).await?;
    let db = client.database(&config.db_name);
    tracing::info!("Connected to document store");

    let service_repository = Arc::new(MongoServiceRepository::new(&db));
    let blog_repository = Arc::new(MongoBlogRepository::new(&db));
    let contact_repository = Arc::new(MongoContactRepository::new(&db));

    let state = AppState::new(
        Arc::new(CatalogService::new(service_repository)),
        Arc::new(BlogService::new(blog_repository)),
        Arc::new(ContactService::new(contact_repository)),
    );

    let app = app_router(state, cors::layer(&config.cors_origins));

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");

    Ok(())
}

/// Resolves on Ctrl-C, letting in-flight requests drain before exit.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl-C handler");
    }
}
