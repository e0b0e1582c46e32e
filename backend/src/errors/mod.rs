//! Global application error types and handlers.
//!
//! `AppError` is what every handler returns on failure. It renders as a JSON
//! body of the form `{"detail": "..."}` with a status code chosen per variant.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::auth::AuthError;
use crate::database::DatabaseError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    #[error(transparent)]
    Auth(#[from] AuthError),

    /// A unique column already holds the submitted value.
    #[error("{0}")]
    Conflict(String),

    /// A foreign key references a row that does not exist.
    #[error("{0}")]
    InvalidReference(String),

    /// The request body or path could not be decoded.
    #[error("{message}")]
    InvalidRequest { status: StatusCode, message: String },

    #[error("Database error: {0}")]
    Database(DatabaseError),
}

impl AppError {
    pub fn not_found(what: &str) -> Self {
        Self::NotFound(format!("{what} not found"))
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Auth(err) => err.status(),
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::InvalidReference(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::InvalidRequest { status, .. } => *status,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<DatabaseError> for AppError {
    fn from(err: DatabaseError) -> Self {
        let message = err.to_string();
        if message.contains("UNIQUE constraint failed") {
            let column = message
                .rsplit("UNIQUE constraint failed:")
                .next()
                .map(|rest| rest.trim_matches(|c: char| c.is_whitespace() || c == '`'))
                .unwrap_or_default()
                .to_string();
            Self::Conflict(format!("A record with this value already exists ({column})"))
        } else if message.contains("FOREIGN KEY constraint failed") {
            Self::InvalidReference("Referenced record does not exist".to_string())
        } else {
            Self::Database(err)
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidRequest {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        // Malformed path parameters are validation failures, not bad syntax.
        Self::InvalidRequest {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let Self::Auth(err) = self {
            return err.into_response();
        }

        let status = self.status();
        let detail = match &self {
            Self::Database(err) => {
                tracing::error!(error = %err, "database operation failed");
                "Internal Server Error".to_string()
            }
            other => other.to_string(),
        };
        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

/// Fallback for unmatched routes.
pub async fn not_found() -> AppError {
    AppError::NotFound("Not Found".to_string())
}
