//! Data Transfer Objects for request deserialization and validation.
//!
//! Responses reuse the domain entities directly; only requests need
//! dedicated types with `validator` derives.

pub mod blog;
pub mod contact;

pub use blog::BlogListQuery;
pub use contact::CreateContactRequest;
