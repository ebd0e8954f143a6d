//! Service catalog retrieval.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::Service;
use crate::domain::repositories::ServiceRepository;
use crate::error::AppError;

/// Hard cap on catalog listing size. The catalog is seed-only content, so a
/// flat cap stands in for pagination.
const MAX_SERVICES: i64 = 100;

/// Read-only access to the service catalog.
pub struct CatalogService {
    repository: Arc<dyn ServiceRepository>,
}

impl CatalogService {
    /// Creates a new catalog service.
    pub fn new(repository: Arc<dyn ServiceRepository>) -> Self {
        Self { repository }
    }

    /// Lists all services, capped at 100 results, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn list_services(&self) -> Result<Vec<Service>, AppError> {
        self.repository.list(MAX_SERVICES).await
    }

    /// Retrieves a service by its exact slug.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no service has this slug.
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn get_service_by_slug(&self, slug: &str) -> Result<Service, AppError> {
        self.repository
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::not_found("Service not found", json!({ "slug": slug })))
    }
}
