//! Session edit request endpoints.

pub mod handlers;
pub mod routes;
