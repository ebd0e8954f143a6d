//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod blog;
pub mod contact;
pub mod root;
pub mod services;

pub use blog::{blog_post_by_slug_handler, list_blog_posts_handler};
pub use contact::create_contact_handler;
pub use root::root_handler;
pub use services::{list_services_handler, service_by_slug_handler};
