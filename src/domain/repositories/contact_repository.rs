//! Repository trait for contact lead storage.

use crate::domain::entities::Contact;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the `contacts` collection.
///
/// Intentionally write-only: no exposed operation reads contacts back, so the
/// trait defines no query methods.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MongoContactRepository`] - MongoDB implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Persists a fully-populated contact document.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn insert(&self, contact: &Contact) -> Result<(), AppError>;
}
