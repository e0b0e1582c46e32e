//! Central module for organizing the application's resource endpoints.
//!
//! Each resource lives in its own submodule with `handlers` and `routes`.
//! [`api_router`] merges them; the bearer-token guard is applied by the
//! caller so that unmatched paths still fall through to the 404 fallback.

pub mod contact;
pub mod extract;
pub mod school;
pub mod session;
pub mod session_edit;
pub mod user;

use axum::Router;

use crate::AppState;

pub fn api_router() -> Router<AppState> {
    Router::new()
        .merge(user::routes::user_router())
        .merge(school::routes::school_router())
        .merge(session::routes::session_router())
        .merge(session_edit::routes::session_edit_router())
        .merge(contact::routes::contact_router())
}
