//! Application services implementing the operation semantics.

pub mod blog_service;
pub mod catalog_service;
pub mod contact_service;

pub use blog_service::BlogService;
pub use catalog_service::CatalogService;
pub use contact_service::ContactService;
