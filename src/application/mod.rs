//! Application layer: business operations over the repository contracts.

pub mod services;
