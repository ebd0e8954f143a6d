//! MongoDB-backed repository implementations.

pub mod mongo_blog_repository;
pub mod mongo_contact_repository;
pub mod mongo_service_repository;

pub use mongo_blog_repository::MongoBlogRepository;
pub use mongo_contact_repository::MongoContactRepository;
pub use mongo_service_repository::MongoServiceRepository;
