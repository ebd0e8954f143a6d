//! MongoDB implementation of the service repository.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::{Collection, Database};

use crate::domain::entities::Service;
use crate::domain::repositories::ServiceRepository;
use crate::error::AppError;

/// MongoDB repository over the `services` collection.
///
/// Documents deserialize directly into [`Service`], which carries no `_id`
/// field, so the store's internal identifier is stripped from every result.
pub struct MongoServiceRepository {
    collection: Collection<Service>,
}

impl MongoServiceRepository {
    /// Creates a repository bound to the `services` collection.
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("services"),
        }
    }
}

#[async_trait]
impl ServiceRepository for MongoServiceRepository {
    async fn list(&self, limit: i64) -> Result<Vec<Service>, AppError> {
        let cursor = self.collection.find(doc! {}).limit(limit).await?;
        let services = cursor.try_collect().await?;
        Ok(services)
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Service>, AppError> {
        let service = self.collection.find_one(doc! { "slug": slug }).await?;
        Ok(service)
    }

    async fn delete_all(&self) -> Result<u64, AppError> {
        let result = self.collection.delete_many(doc! {}).await?;
        Ok(result.deleted_count)
    }

    async fn insert_many(&self, services: &[Service]) -> Result<(), AppError> {
        if services.is_empty() {
            return Ok(());
        }
        self.collection.insert_many(services).await?;
        Ok(())
    }
}
