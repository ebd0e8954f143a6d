//! Request DTO for contact-form submission.

use serde::Deserialize;
use validator::Validate;

use crate::domain::entities::NewContact;

/// Body for `POST /api/contact`.
///
/// Validation runs before any store access: a malformed email or an empty
/// required field fails the request with a 422 and no write is attempted.
/// `phone` is optional and passed through verbatim when present.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateContactRequest {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,

    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    pub phone: Option<String>,

    #[validate(length(min = 1, message = "subject must not be empty"))]
    pub subject: String,

    #[validate(length(min = 1, message = "message must not be empty"))]
    pub message: String,
}

impl From<CreateContactRequest> for NewContact {
    fn from(request: CreateContactRequest) -> Self {
        NewContact {
            name: request.name,
            email: request.email,
            phone: request.phone,
            subject: request.subject,
            message: request.message,
        }
    }
}
