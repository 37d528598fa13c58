//! Login handler.

use axum::extract::State;
use axum::response::Json;

use crate::backend::error::{AppError, Result};
use crate::backend::server::state::AppState;
use crate::shared::types::{AuthRequest, TokenResponse};

/// Handle `POST /login`.
///
/// Verifies the credentials and issues a fresh session token.
///
/// # Errors
///
/// * `400` - missing or empty username/password
/// * `401` - unknown username or wrong password (single message for both)
/// * `500` - verification, signing, or store failure
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<AuthRequest>,
) -> Result<Json<TokenResponse>> {
    if request.username.trim().is_empty() || request.password.is_empty() {
        return Err(AppError::Validation("please fill out all fields".into()));
    }

    tracing::info!(username = %request.username, "login request");

    let user = state
        .credentials
        .verify(&request.username, &request.password)
        .await?;

    let token = state.tokens.issue(&user.username)?;
    tracing::info!(username = %user.username, "login succeeded");
    Ok(Json(TokenResponse { token }))
}
