//! Middleware for protecting authenticated routes.
//!
//! Every API router is wrapped with [`require_bearer`], which rejects the
//! request before it reaches a handler unless it carries the configured token.

use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;

use super::errors::AuthError;
use super::models::BearerToken;
use super::service::AuthService;
use crate::errors::AppError;

pub async fn require_bearer(
    State(auth): State<AuthService>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(BearerToken::from_header)
        .ok_or(AuthError::MissingCredentials)?;

    if let Err(err) = auth.verify(&token) {
        tracing::warn!(path = %request.uri().path(), "rejected request with invalid token");
        return Err(err.into());
    }

    Ok(next.run(request).await)
}
