//! Destructive seeding of the content collections.
//!
//! Resets `services` and `blog_posts` to the fixed datasets in [`data`].
//! Intended to be run out-of-band via the `seed` binary, never by the live
//! API process.

pub mod data;

use std::sync::Arc;

use crate::domain::repositories::{BlogRepository, ServiceRepository};
use crate::error::AppError;

/// Outcome of a completed seeding run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub services_deleted: u64,
    pub services_inserted: usize,
    pub posts_deleted: u64,
    pub posts_inserted: usize,
}

/// Resets both content collections to the fixed seed datasets.
///
/// Steps, in order: delete all `services`; delete all `blog_posts`; insert
/// the full services dataset; insert the full blog posts dataset (each insert
/// skipped by the repository when its dataset is empty). Destructive by
/// design: any pre-existing data is lost. Running it twice leaves exactly the
/// seed dataset in place.
///
/// # Errors
///
/// Any store failure propagates immediately and aborts the remaining steps;
/// there is no rollback or retry.
pub async fn run(
    service_repository: Arc<dyn ServiceRepository>,
    blog_repository: Arc<dyn BlogRepository>,
) -> Result<SeedReport, AppError> {
    tracing::info!("Starting database seeding");

    let services_deleted = service_repository.delete_all().await?;
    let posts_deleted = blog_repository.delete_all().await?;

    let services = data::seed_services();
    service_repository.insert_many(&services).await?;
    tracing::info!(count = services.len(), "Inserted services");

    let posts = data::seed_blog_posts();
    blog_repository.insert_many(&posts).await?;
    tracing::info!(count = posts.len(), "Inserted blog posts");

    tracing::info!("Database seeding completed");

    Ok(SeedReport {
        services_deleted,
        services_inserted: services.len(),
        posts_deleted,
        posts_inserted: posts.len(),
    })
}
