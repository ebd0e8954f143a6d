//! # Veteran Nexus API
//!
//! Content and lead-capture backend for a veteran disability claims service,
//! built with Axum and MongoDB.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Core business entities and repository traits
//! - **Application Layer** ([`application`]) - Operation semantics over the repositories
//! - **Infrastructure Layer** ([`infrastructure`]) - MongoDB integrations
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//! - **Seed** ([`seed`]) - Fixed content datasets and the destructive reset routine
//!
//! ## Quick Start
//!
//! ```bash
//! # Set required environment variables
//! export MONGO_URL="mongodb://localhost:27017"
//! export DB_NAME="veteran_nexus"
//!
//! # Populate the content collections
//! cargo run --bin seed -- run --yes
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod seed;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{BlogService, CatalogService, ContactService};
    pub use crate::domain::entities::{BlogPost, Contact, Faq, NewContact, Service};
    pub use crate::domain::repositories::{BlogFilter, BlogRepository, ContactRepository, ServiceRepository};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
