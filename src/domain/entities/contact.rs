//! Contact entity representing a submitted lead.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Status assigned to every freshly submitted contact.
///
/// No transition logic exists; the field is a placeholder for a future
/// lead-management workflow and is only ever written with this value.
pub const STATUS_NEW: &str = "new";

/// A lead submitted through the public contact form.
///
/// `id` and `created_at` are server-assigned, never client-supplied. From the
/// API's perspective this entity is write-only: no endpoint reads, updates,
/// or deletes contacts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Validated input for creating a contact, before server fields are assigned.
#[derive(Debug, Clone)]
pub struct NewContact {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
}

impl Contact {
    /// Builds a persistable contact from validated input, assigning a fresh
    /// UUID, the `"new"` status, and the current UTC timestamp.
    pub fn from_new(new: NewContact) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: new.name,
            email: new.email,
            phone: new.phone,
            subject: new.subject,
            message: new.message,
            status: STATUS_NEW.to_string(),
            created_at: Utc::now(),
        }
    }
}
