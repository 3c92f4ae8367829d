//! API handlers.
//!
//! Each handler is a single validate-then-act step with no shared state
//! beyond what `AppState` carries.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, Uri},
    response::{IntoResponse, Response},
    Json,
};

use crate::contacts::{Contact, ContactSubmission};
use crate::http::response::{ApiError, ContactCreated, HealthStatus};
use crate::http::server::AppState;
use crate::observability::metrics;

/// `POST /api/contact`
pub async fn submit_contact(
    State(state): State<AppState>,
    payload: Result<Json<ContactSubmission>, JsonRejection>,
) -> Result<Json<ContactCreated>, ApiError> {
    let Json(submission) =
        payload.map_err(|rejection| ApiError::InvalidSubmission(rejection.body_text()))?;

    let new = submission.validate().map_err(|errors| {
        ApiError::InvalidSubmission(
            errors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", "),
        )
    })?;

    let contact = state
        .contacts
        .create(new)
        .map_err(ApiError::SubmitContact)?;

    metrics::record_contact_created();
    tracing::info!(id = %contact.id, "Contact form submitted");

    Ok(Json(ContactCreated {
        success: true,
        id: contact.id,
    }))
}

/// `GET /api/contacts`
// TODO: gate behind an admin token before exposing this publicly.
pub async fn list_contacts(State(state): State<AppState>) -> Result<Json<Vec<Contact>>, ApiError> {
    let contacts = state.contacts.list().map_err(ApiError::ListContacts)?;
    tracing::debug!(count = contacts.len(), "Listing contacts");
    Ok(Json(contacts))
}

/// `GET /api/resume/download`
pub async fn download_resume(State(state): State<AppState>) -> Result<Response, ApiError> {
    let content = state.resume.load().await?;
    let disposition = format!(
        "attachment; filename=\"{}\"",
        state.resume.attachment_filename()
    );

    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        content,
    )
        .into_response())
}

/// `GET /api/health`
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Unknown `/api/*` paths get a JSON 404 instead of the static site.
pub async fn api_not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}
