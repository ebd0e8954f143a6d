//! Core business entities.
//!
//! Entities double as persisted documents and response bodies: serde renames
//! pin the camelCase wire format, and the absence of an `_id` field keeps the
//! store's internal identifier out of every response.

pub mod blog_post;
pub mod contact;
pub mod service;

pub use blog_post::BlogPost;
pub use contact::{Contact, NewContact, STATUS_NEW};
pub use service::{Faq, Service};
