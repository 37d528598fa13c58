//! Error conversions.
//!
//! `AppError` implements `IntoResponse` so handlers and middleware can
//! return it directly. Error responses are JSON:
//!
//! ```json
//! {"error": "post not found", "status": 404}
//! ```
//!
//! Store errors are translated here as well: unique and foreign-key
//! violations become `Conflict`/`NotFound`, everything else is forwarded as
//! a generic `Internal` without leaking driver detail.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::backend::auth::tokens::TokenError;
use crate::backend::error::types::AppError;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = serde_json::json!({
            "error": self.message(),
            "status": status.as_u16(),
        });
        (status, [(header::CONTENT_TYPE, "application/json")], Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db) = &err {
            match db.code().as_deref() {
                // unique_violation: store-level username uniqueness
                Some("23505") => return AppError::Conflict("resource already exists".into()),
                // foreign_key_violation: comment referencing a missing post
                Some("23503") => return AppError::NotFound("referenced entity".into()),
                _ => {}
            }
        }
        tracing::error!("store error: {err:?}");
        AppError::Internal("storage failure".into())
    }
}

impl From<TokenError> for AppError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::InvalidSignature | TokenError::Malformed => {
                AppError::Unauthenticated("invalid token".into())
            }
            TokenError::Signing => AppError::Internal("token signing failed".into()),
        }
    }
}
