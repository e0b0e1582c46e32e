//! Supervision session endpoints.

pub mod handlers;
pub mod routes;
