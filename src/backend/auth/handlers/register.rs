//! Registration handler.

use axum::extract::State;
use axum::response::Json;

use crate::backend::error::Result;
use crate::backend::server::state::AppState;
use crate::shared::types::{AuthRequest, TokenResponse};

/// Handle `POST /register`.
///
/// Creates the user and immediately issues a session token so the client is
/// authenticated without a second round trip.
///
/// # Errors
///
/// * `400` - missing or empty username/password
/// * `409` - username already taken
/// * `500` - hashing, signing, or store failure
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<AuthRequest>,
) -> Result<Json<TokenResponse>> {
    tracing::info!(username = %request.username, "registration request");

    let user = state
        .credentials
        .register(&request.username, &request.password)
        .await?;

    let token = state.tokens.issue(&user.username)?;
    Ok(Json(TokenResponse { token }))
}
