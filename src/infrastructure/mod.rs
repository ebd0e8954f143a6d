//! Infrastructure layer: document store integrations.

pub mod persistence;
