//! Authentication module: bearer-token guard and password hashing.
//!
//! Every resource route requires the configured API token. User passwords are
//! stored salted and hashed, never in clear text.

pub mod errors;
pub mod middleware;
pub mod models;
pub mod service;

// Re-exports for convenience
pub use errors::*;
pub use middleware::*;
pub use models::*;
pub use service::*;
