//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::{BlogService, CatalogService, ContactService};

/// Process-wide state: the three application services, each wrapping its
/// repository. Constructed once at startup and cloned per request; handlers
/// hold no other durable state.
#[derive(Clone)]
pub struct AppState {
    pub catalog_service: Arc<CatalogService>,
    pub blog_service: Arc<BlogService>,
    pub contact_service: Arc<ContactService>,
}

impl AppState {
    /// Creates application state from the three services.
    pub fn new(
        catalog_service: Arc<CatalogService>,
        blog_service: Arc<BlogService>,
        contact_service: Arc<ContactService>,
    ) -> Self {
        Self {
            catalog_service,
            blog_service,
            contact_service,
        }
    }
}
