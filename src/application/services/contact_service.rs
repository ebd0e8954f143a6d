//! Contact lead capture.

use std::sync::Arc;

use crate::domain::entities::{Contact, NewContact};
use crate::domain::repositories::ContactRepository;
use crate::error::AppError;

/// Accepts validated contact-form submissions and persists them.
pub struct ContactService {
    repository: Arc<dyn ContactRepository>,
}

impl ContactService {
    /// Creates a new contact service.
    pub fn new(repository: Arc<dyn ContactRepository>) -> Self {
        Self { repository }
    }

    /// Persists a new lead and returns the full record including
    /// server-assigned fields (`id`, `status`, `createdAt`).
    ///
    /// Input validation happens at the API boundary; a [`NewContact`]
    /// reaching this point is already well-formed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn submit(&self, new_contact: NewContact) -> Result<Contact, AppError> {
        let contact = Contact::from_new(new_contact);

        self.repository.insert(&contact).await?;

        tracing::info!(contact_id = %contact.id, "Contact submission stored");

        Ok(contact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::STATUS_NEW;
    use crate::domain::repositories::MockContactRepository;
    use serde_json::json;

    fn new_contact() -> NewContact {
        NewContact {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone: Some("+91 98765 43210".to_string()),
            subject: "Hi".to_string(),
            message: "Help".to_string(),
        }
    }

    #[tokio::test]
    async fn test_submit_persists_and_returns_record() {
        let mut mock_repo = MockContactRepository::new();
        mock_repo
            .expect_insert()
            .withf(|c| c.email == "jane@example.com" && c.status == STATUS_NEW && !c.id.is_empty())
            .times(1)
            .returning(|_| Ok(()));

        let service = ContactService::new(Arc::new(mock_repo));
        let contact = service.submit(new_contact()).await.unwrap();

        assert_eq!(contact.name, "Jane Doe");
        assert_eq!(contact.status, STATUS_NEW);
        assert_eq!(contact.phone.as_deref(), Some("+91 98765 43210"));
    }

    #[tokio::test]
    async fn test_submit_propagates_store_failure() {
        let mut mock_repo = MockContactRepository::new();
        mock_repo
            .expect_insert()
            .times(1)
            .returning(|_| Err(AppError::internal("Document store error", json!({}))));

        let service = ContactService::new(Arc::new(mock_repo));
        let result = service.submit(new_contact()).await;

        assert!(matches!(result.unwrap_err(), AppError::Internal { .. }));
    }
}
