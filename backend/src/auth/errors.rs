//! Custom error types specific to authentication failures.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    /// No `Authorization: Bearer ...` header was sent.
    #[error("Not authenticated")]
    MissingCredentials,

    /// A bearer token was sent but does not match.
    #[error("Unauthorized")]
    InvalidToken,

    /// The password could not be hashed.
    #[error("Password hashing failed: {0}")]
    PasswordHash(String),
}

impl AuthError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingCredentials => StatusCode::UNAUTHORIZED,
            Self::InvalidToken => StatusCode::BAD_REQUEST,
            Self::PasswordHash(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            Self::MissingCredentials => (
                status,
                [(header::WWW_AUTHENTICATE, "Bearer")],
                Json(json!({ "detail": self.to_string() })),
            )
                .into_response(),
            Self::InvalidToken => {
                (status, Json(json!({ "detail": self.to_string() }))).into_response()
            }
            Self::PasswordHash(reason) => {
                tracing::error!(%reason, "password hashing failed");
                (status, Json(json!({ "detail": "Internal Server Error" }))).into_response()
            }
        }
    }
}
