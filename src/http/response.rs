//! Response envelopes and error mapping.
//!
//! # Responsibilities
//! - Define the JSON bodies returned by the API
//! - Map handler failures to status codes and generic messages
//! - Log every failure before it leaves the server
//!
//! # Design Decisions
//! - Callers only ever see a generic message; detail stays in the logs
//! - Validation failures log at warn, internal failures at error

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::contacts::{ContactId, StoreError};
use crate::resume::ResumeError;

pub const SUBMIT_FAILED: &str =
    "Failed to submit contact form. Please check your input and try again.";
pub const LIST_FAILED: &str = "Failed to fetch contacts";
pub const RESUME_FAILED: &str = "Failed to download resume";
pub const NOT_FOUND: &str = "Not found";

/// Body of every failed API call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Failure {
    pub success: bool,
    pub message: String,
}

impl Failure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Body of a successful contact submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactCreated {
    pub success: bool,
    pub id: ContactId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid contact submission: {0}")]
    InvalidSubmission(String),
    #[error("failed to store contact: {0}")]
    SubmitContact(#[source] StoreError),
    #[error("failed to fetch contacts: {0}")]
    ListContacts(#[source] StoreError),
    #[error("failed to load resume: {0}")]
    Resume(#[from] ResumeError),
    #[error("no route for {0}")]
    NotFound(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidSubmission(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::SubmitContact(_) | ApiError::ListContacts(_) | ApiError::Resume(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn public_message(&self) -> &'static str {
        match self {
            ApiError::InvalidSubmission(_) | ApiError::SubmitContact(_) => SUBMIT_FAILED,
            ApiError::ListContacts(_) => LIST_FAILED,
            ApiError::Resume(_) => RESUME_FAILED,
            ApiError::NotFound(_) => NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::warn!(error = %self, "Request rejected");
        }

        (status, Json(Failure::new(self.public_message()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_follow_error_kind() {
        assert_eq!(
            ApiError::InvalidSubmission("x".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::SubmitContact(StoreError::Poisoned).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::ListContacts(StoreError::Poisoned).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::Resume(ResumeError::Empty).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn failure_envelope_shape() {
        let json = serde_json::to_value(Failure::new(LIST_FAILED)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "success": false, "message": "Failed to fetch contacts" })
        );
    }
}
