//! Repository traits defining the document store contract.
//!
//! Each trait covers one collection. MongoDB implementations live in
//! [`crate::infrastructure::persistence`]; tests use `mockall` mocks or
//! in-memory stubs.

pub mod blog_repository;
pub mod contact_repository;
pub mod service_repository;

pub use blog_repository::{BlogFilter, BlogRepository};
pub use contact_repository::ContactRepository;
pub use service_repository::ServiceRepository;

#[cfg(test)]
pub use blog_repository::MockBlogRepository;
#[cfg(test)]
pub use contact_repository::MockContactRepository;
#[cfg(test)]
pub use service_repository::MockServiceRepository;
