//! Request and response wire types for the HTTP surface.
//!
//! These are used by the backend handlers and by the client API wrapper so
//! the two sides cannot drift apart.

use serde::{Deserialize, Serialize};

/// Credentials payload for `POST /register` and `POST /login`.
///
/// Fields default to empty strings so that a missing field is reported as a
/// validation failure with a descriptive message rather than a
/// deserialization error.
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Response for `POST /register` and `POST /login`.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Signed session token; the client stores it and attaches it as
    /// `Authorization: Bearer <token>` on protected routes.
    pub token: String,
}

/// Body for `POST /posts`.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct NewPost {
    #[serde(default)]
    pub title: String,
    /// Optional URL the post points at.
    #[serde(default)]
    pub link: Option<String>,
}

/// Body for `POST /posts/{post}/comments`.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct NewComment {
    #[serde(default)]
    pub body: String,
}

/// JSON error body returned for every failed request.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub status: u16,
}
