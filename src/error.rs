//! Application error type and its HTTP representation.
//!
//! [`AppError`] is what services return to handlers. Store-layer failures arrive
//! as [`StoreError`] and are collapsed into a single generic category before
//! they reach a client, so database internals never leak into responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;

/// Message returned to clients for every infrastructure failure.
pub const GENERIC_FAILURE_MESSAGE: &str = "An error occurred";

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Serializable error payload, stable across releases.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },
    #[error("{message}")]
    NotFound { message: String, details: Value },
    #[error("{message}")]
    Store { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn store(message: impl Into<String>, details: Value) -> Self {
        Self::Store {
            message: message.into(),
            details,
        }
    }

    /// Stable machine-readable code for this error kind.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation { .. } => "validation_error",
            AppError::NotFound { .. } => "not_found",
            AppError::Store { .. } => "internal_error",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Builds the client-facing payload.
    ///
    /// Store failures are reduced to [`GENERIC_FAILURE_MESSAGE`] with empty details.
    pub fn to_error_info(&self) -> ErrorInfo {
        let (message, details) = match self {
            AppError::Validation { message, details } | AppError::NotFound { message, details } => {
                (message.clone(), details.clone())
            }
            AppError::Store { .. } => (GENERIC_FAILURE_MESSAGE.to_string(), json!({})),
        };

        ErrorInfo {
            code: self.code(),
            message,
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Store { message, details } = &self {
            tracing::error!(%details, "{}", message);
        }

        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (self.status(), Json(body)).into_response()
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        let mut fields: Vec<String> = e.field_errors().keys().map(|k| k.to_string()).collect();
        fields.sort();
        AppError::bad_request("Invalid request", json!({ "fields": fields }))
    }
}

/// Failures reported by a [`crate::domain::repositories::MappingRepository`].
///
/// Uniqueness violations are split by column so the resolver can tell a
/// short-code collision (retry with a new code) from a concurrent insert of the
/// same long URL (re-read the winner).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("short code already exists")]
    DuplicateShortCode,
    #[error("long URL already exists")]
    DuplicateLongUrl,
    #[error("database error: {0}")]
    Database(String),
}

pub const SHORT_CODE_CONSTRAINT: &str = "url_mappings_short_code_key";
pub const LONG_URL_CONSTRAINT: &str = "url_mappings_long_url_key";

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error()
            && db.is_unique_violation()
        {
            match db.constraint() {
                Some(SHORT_CODE_CONSTRAINT) => return StoreError::DuplicateShortCode,
                Some(LONG_URL_CONSTRAINT) => return StoreError::DuplicateLongUrl,
                _ => {}
            }
        }

        StoreError::Database(e.to_string())
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        AppError::store("Store operation failed", json!({ "reason": e.to_string() }))
    }
}
