//! Contact form endpoints.

pub mod handlers;
pub mod routes;
