//! Handler for contact-form submission.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::CreateContactRequest;
use crate::domain::entities::Contact;
use crate::error::AppError;
use crate::state::AppState;

/// Accepts a contact-form submission. The only mutation-capable endpoint.
///
/// # Endpoint
///
/// `POST /api/contact`
///
/// # Behavior
///
/// Validation runs first; nothing is written on failure. On success the
/// server assigns `id`, `status = "new"`, and `createdAt`, persists the
/// document, and returns the full record including those fields.
///
/// # Errors
///
/// Returns 422 Unprocessable Entity on a malformed email or a missing
/// required field.
pub async fn create_contact_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateContactRequest>,
) -> Result<Json<Contact>, AppError> {
    payload.validate()?;

    let contact = state.contact_service.submit(payload.into()).await?;

    Ok(Json(contact))
}
