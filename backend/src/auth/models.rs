//! Data structures for authentication-related entities.

use axum::http::HeaderValue;

/// Credentials pulled from an `Authorization: Bearer <token>` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BearerToken(pub String);

impl BearerToken {
    /// Parse an `Authorization` header value.
    ///
    /// The value is split once at the first space. The scheme is matched
    /// case-insensitively and the remainder is taken verbatim, so an empty
    /// or space-padded token is returned as-is and fails verification later.
    /// Returns `None` for an empty header, another scheme, or a non-ASCII header.
    pub fn from_header(value: &HeaderValue) -> Option<Self> {
        let value = value.to_str().ok()?;
        if value.is_empty() {
            return None;
        }
        let (scheme, token) = value.split_once(' ').unwrap_or((value, ""));
        if !scheme.eq_ignore_ascii_case("bearer") {
            return None;
        }
        Some(Self(token.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
