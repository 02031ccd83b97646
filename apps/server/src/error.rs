//! Error types for the HTTP API.
//!
//! ## Status Mapping
//! ```text
//! ApiError::InvalidArgument → 422 Unprocessable Entity
//! ApiError::NotFound        → 404 Not Found
//! ApiError::Conflict        → 409 Conflict
//! ApiError::Unauthorized    → 401 Unauthorized
//! ApiError::Internal        → 500 Internal Server Error
//! ```
//!
//! All failures reach the client as `{"detail": "<message>"}` JSON.
//! They are terminal and non-retryable; nothing is recovered locally.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use acronyms_core::ValidationError;
use acronyms_db::DbError;

/// HTTP API errors.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Request input failed validation (surfaced before storage).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// No row matched an id-based lookup or delete.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A write violated the (abbreviation, phrase) or email uniqueness
    /// invariant.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Missing, unknown, or expired bearer token.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Unclassified storage or serialization failure.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Returns the HTTP status this error surfaces as.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidArgument(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::InvalidArgument(err.to_string())
    }
}

/// Classify database failures into the API taxonomy.
///
/// Uniqueness violations become conflicts, missing rows become not
/// found, and everything else propagates unclassified.
impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { .. } => ApiError::NotFound(err.to_string()),
            DbError::UniqueViolation { .. } => ApiError::Conflict(err.to_string()),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Internal(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = self.to_string();
        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::InvalidArgument("limit".into()).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(ApiError::NotFound("42".into()).status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::Conflict("dup".into()).status(), StatusCode::CONFLICT);
        assert_eq!(
            ApiError::Unauthorized("token".into()).status(),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn test_db_errors_classify() {
        let err: ApiError = DbError::not_found("Acronym", "7").into();
        assert!(matches!(err, ApiError::NotFound(_)));

        let err: ApiError = DbError::duplicate("acronyms.abbreviation", "DM").into();
        assert!(matches!(err, ApiError::Conflict(_)));

        let err: ApiError = DbError::PoolExhausted.into();
        assert!(matches!(err, ApiError::Internal(_)));
    }
}
