//! Request processing middleware.

pub mod cors;
pub mod tracing;
