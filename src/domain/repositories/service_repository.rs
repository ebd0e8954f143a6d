//! Repository trait for service offering data access.

use crate::domain::entities::Service;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the `services` collection.
///
/// Read paths serve the public API; `delete_all` and `insert_many` exist only
/// for the seeder's destructive reset.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MongoServiceRepository`] - MongoDB implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ServiceRepository: Send + Sync {
    /// Lists services in insertion order, capped at `limit` results.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn list(&self, limit: i64) -> Result<Vec<Service>, AppError>;

    /// Finds a service by its exact slug.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Service))` if found
    /// - `Ok(None)` if no service has this slug
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Service>, AppError>;

    /// Deletes every document in the collection. Seeder-only.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn delete_all(&self) -> Result<u64, AppError>;

    /// Inserts the given services. A no-op when `services` is empty. Seeder-only.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn insert_many(&self, services: &[Service]) -> Result<(), AppError>;
}
