//! Password hashing and bearer-token authentication.
//!
//! Passwords are stored as Argon2id PHC strings. Tokens are opaque
//! database-backed strings issued at login; a request proves identity
//! by presenting one in an `Authorization: Bearer <token>` header.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;
use tracing::debug;

use acronyms_db::User;

use crate::error::ApiError;
use crate::state::AppState;

/// Hashes a password for storage.
pub fn hash_password(password: &str) -> Result<String, ApiError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| ApiError::Internal(format!("Password hashing failed: {e}")))?;
    Ok(hash.to_string())
}

/// Checks a password against a stored PHC hash.
///
/// A malformed stored hash counts as a failed verification rather than
/// an internal error, so login never leaks storage details.
pub fn verify_password(password: &str, stored: &str) -> bool {
    match PasswordHash::new(stored) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    }
}

/// Extracts the bearer token from a request's headers.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

/// Resolves the authenticated user for a request.
///
/// Fails with 401 when the header is missing, the token is unknown or
/// expired, or the account has been deactivated.
pub async fn current_user(state: &AppState, headers: &HeaderMap) -> Result<User, ApiError> {
    let token = bearer_token(headers)
        .ok_or_else(|| ApiError::Unauthorized("Missing bearer token".to_string()))?;

    let access = state
        .db
        .tokens()
        .get_valid(token)
        .await?
        .ok_or_else(|| ApiError::Unauthorized("Invalid or expired token".to_string()))?;

    let user = state
        .db
        .users()
        .get_by_id(&access.user_id)
        .await?
        .ok_or_else(|| ApiError::Unauthorized("Unknown user".to_string()))?;

    if !user.is_active {
        debug!(user_id = %user.id, "Rejected token for inactive user");
        return Err(ApiError::Unauthorized("Inactive user".to_string()));
    }

    Ok(user)
}
