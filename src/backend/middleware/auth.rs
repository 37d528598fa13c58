//! Authorization middleware.
//!
//! Validates the `Authorization: Bearer <token>` header on protected
//! routes and attaches the resulting identity to the request extensions.
//! Authorization is stateless: the username claim is trusted directly from
//! the verified token with no database lookup, so its cost is O(1) and a
//! user renamed or deleted after issuance stays valid until the token
//! expires — a property of stateless tokens, not a bug.

use axum::extract::{FromRequestParts, Request, State};
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::Response;

use crate::backend::error::AppError;
use crate::backend::server::state::AppState;
use crate::shared::session::{is_expired, unix_now};

/// Identity attached to a request by [`require_auth`].
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub username: String,
}

/// Reject the request unless it carries a valid, unexpired bearer token.
///
/// The checks run in order: header present, `Bearer ` prefix, signature
/// valid, not expired. Every failure maps to 401.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("missing authorization header");
            AppError::Unauthenticated("missing bearer token".into())
        })?;

    let token = header.strip_prefix("Bearer ").ok_or_else(|| {
        tracing::warn!("authorization header is not a bearer token");
        AppError::Unauthenticated("missing bearer token".into())
    })?;

    let claims = state.tokens.decode(token).map_err(|e| {
        tracing::warn!("rejected token: {e}");
        AppError::Unauthenticated("invalid token".into())
    })?;

    if is_expired(&claims, unix_now()) {
        tracing::warn!(username = %claims.username, "rejected expired token");
        return Err(AppError::Unauthenticated("token expired".into()));
    }

    request.extensions_mut().insert(AuthenticatedUser {
        username: claims.username,
    });
    Ok(next.run(request).await)
}

/// Extractor for the identity set by [`require_auth`].
///
/// Only usable on routes behind the middleware; elsewhere it rejects with
/// 401 rather than exposing an unauthenticated handler by accident.
#[derive(Debug, Clone)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S: Send + Sync> FromRequestParts<S> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .map(AuthUser)
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser missing from request extensions");
                AppError::Unauthenticated("missing bearer token".into())
            })
    }
}
