//! The `AppError` enum and its HTTP status mapping.

use axum::http::StatusCode;
use thiserror::Error;

/// All failures a request can surface.
///
/// Validation and not-found errors are detected close to the boundary
/// (pipeline or handler) and carry a client-visible message. Store-level
/// failures are collapsed into `Internal` before they reach the responder so
/// no infrastructure detail leaks.
#[derive(Debug, Error)]
pub enum AppError {
    /// Missing or empty required field
    #[error("validation error: {0}")]
    Validation(String),

    /// Missing, malformed, unsigned, or expired token; bad credentials
    #[error("unauthenticated: {0}")]
    Unauthenticated(String),

    /// Referenced post/comment/user does not resolve
    #[error("{0} not found")]
    NotFound(String),

    /// Resource already exists (duplicate username at registration)
    #[error("conflict: {0}")]
    Conflict(String),

    /// Store or infrastructure failure
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// The HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The client-visible message.
    pub fn message(&self) -> String {
        match self {
            Self::Validation(m)
            | Self::Unauthenticated(m)
            | Self::Conflict(m)
            | Self::Internal(m) => m.clone(),
            Self::NotFound(what) => format!("{what} not found"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_code_mapping() {
        assert_eq!(
            AppError::Validation("title is required".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Unauthenticated("missing bearer token".into()).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::NotFound("post".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Conflict("username already taken".into()).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::Internal("storage failure".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn not_found_message_names_the_entity() {
        let err = AppError::NotFound("post".into());
        assert_eq!(err.message(), "post not found");
    }
}
