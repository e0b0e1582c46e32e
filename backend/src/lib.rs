//! SchoolSync backend library.
//!
//! Exposes [`router`], the application entry object served by the binary,
//! together with the modules it is built from.

pub mod api;
pub mod auth;
pub mod config;
pub mod database;
pub mod errors;
pub mod middleware;

use axum::extract::FromRef;
use axum::{routing::get, Router};

use crate::auth::AuthService;
use crate::config::AppConfig;
use crate::database::{Database, DatabaseError};

/// State shared by every handler.
#[derive(Clone, FromRef)]
pub struct AppState {
    pub db: Database,
    pub auth: AuthService,
}

impl AppState {
    pub fn new(db: Database, auth: AuthService) -> Self {
        Self { db, auth }
    }

    /// Open the configured database and build the token guard.
    pub async fn from_config(config: &AppConfig) -> Result<Self, DatabaseError> {
        let db = Database::connect(&config.database.url).await?;
        Ok(Self::new(db, AuthService::new(config.auth.api_token.clone())))
    }
}

/// Build the full application: resource routes behind the bearer guard, the
/// public banner at `/`, a JSON 404 fallback and request tracing.
pub fn router(state: AppState) -> Router {
    let guarded = api::api_router().route_layer(axum::middleware::from_fn_with_state(
        state.auth.clone(),
        auth::require_bearer,
    ));

    let app = Router::new()
        .route("/", get(root_handler))
        .merge(guarded)
        .fallback(errors::not_found)
        .with_state(state);

    middleware::with_tracing(app)
}

async fn root_handler() -> &'static str {
    "Welcome to SchoolSync!"
}
