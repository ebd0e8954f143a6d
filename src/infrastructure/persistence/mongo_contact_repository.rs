//! MongoDB implementation of the contact repository.

use async_trait::async_trait;
use mongodb::{Collection, Database};

use crate::domain::entities::Contact;
use crate::domain::repositories::ContactRepository;
use crate::error::AppError;

/// MongoDB repository over the `contacts` collection.
///
/// Write-only, mirroring the trait: leads are captured here and consumed by
/// out-of-band tooling, never read back through the API.
pub struct MongoContactRepository {
    collection: Collection<Contact>,
}

impl MongoContactRepository {
    /// Creates a repository bound to the `contacts` collection.
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("contacts"),
        }
    }
}

#[async_trait]
impl ContactRepository for MongoContactRepository {
    async fn insert(&self, contact: &Contact) -> Result<(), AppError> {
        self.collection.insert_one(contact).await?;
        Ok(())
    }
}
