//! HTTP error handling and response conversion.
//!
//! Handler errors map to a status code and a JSON body of the form
//! `{"error": "<message>"}`. Client errors carry a fixed, user-facing message.
//! Store failures carry a generic message per endpoint while the underlying
//! cause is only written to the server log.

use crate::domain::product::errors::DomainError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;

pub const INVALID_QUERY_PARAMETERS: &str = "Invalid query parameters";
pub const QUERY_TOO_SHORT: &str = "Query too short";
pub const SEARCH_FAILED: &str = "Search failed";
pub const AUTOCOMPLETE_FAILED: &str = "Autocomplete failed";

/// Application-level errors returned from handlers.
#[derive(Debug)]
pub enum AppError {
    /// Malformed or missing request parameters (400). Never retried.
    BadRequest(String),

    /// Catalog store read failed (500).
    ///
    /// `operation` is the message returned to the caller; `detail` is only logged.
    Store {
        operation: &'static str,
        detail: String,
    },
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            Self::Store { operation, detail } => {
                write!(f, "Store error ({}): {}", operation, detail)
            }
        }
    }
}

impl AppError {
    /// Converts a use case failure into the response for one endpoint.
    ///
    /// Validation failures become `client_message` (400); anything else becomes
    /// `operation` (500).
    pub fn from_domain(
        err: DomainError,
        client_message: &'static str,
        operation: &'static str,
    ) -> Self {
        match err {
            DomainError::ValidationError(msg) => {
                tracing::debug!(validation_error = %msg);
                AppError::BadRequest(client_message.into())
            }
            DomainError::InfrastructureError(detail) => AppError::Store { operation, detail },
        }
    }

    /// Get the appropriate HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get a user-safe error message (without implementation details).
    fn user_message(&self) -> String {
        match self {
            Self::BadRequest(msg) => msg.clone(),
            Self::Store { operation, .. } => (*operation).into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.user_message();

        match status {
            StatusCode::INTERNAL_SERVER_ERROR => {
                tracing::error!("error={}", self);
            }
            _ => {
                tracing::warn!("error={}", self);
            }
        }

        (status, Json(json!({ "error": message }))).into_response()
    }
}

// === Validation Error Conversion ===

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        tracing::debug!(validation_errors = %err);
        AppError::BadRequest(INVALID_QUERY_PARAMETERS.into())
    }
}
