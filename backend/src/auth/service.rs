//! Core business logic for the authentication system.
//!
//! Token verification for the API guard and Argon2 password hashing for
//! stored user accounts.

use std::sync::Arc;

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHasher, SaltString};
use argon2::Argon2;

use super::errors::AuthError;
use super::models::BearerToken;

/// Verifies bearer tokens against the single configured API token.
#[derive(Clone)]
pub struct AuthService {
    api_token: Arc<str>,
}

impl AuthService {
    pub fn new(api_token: impl Into<String>) -> Self {
        Self {
            api_token: Arc::from(api_token.into()),
        }
    }

    pub fn verify(&self, token: &BearerToken) -> Result<(), AuthError> {
        if constant_time_eq(token.as_str().as_bytes(), self.api_token.as_bytes()) {
            Ok(())
        } else {
            Err(AuthError::InvalidToken)
        }
    }
}

/// Hash a password into a PHC string (`$argon2id$v=19$...`) with a random salt.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AuthError::PasswordHash(e.to_string()))
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
