//! Entity-resolution pipeline.
//!
//! Routes declare entity references as path segments (`{post}`,
//! `{comment}`). For each one, a resolution layer runs before the handler:
//! look the entity up, short-circuit with 404 if the identifier does not
//! parse or does not resolve, otherwise attach the loaded entity to the
//! request under the segment's name. Steps compose — the comment routes
//! stack `resolve_comment` inside `resolve_post` — and on protected routes
//! the authorization layer always runs first, so unauthenticated requests
//! are rejected before any store access.

use std::collections::HashMap;

use axum::extract::{FromRequestParts, Path, Request, State};
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::Response;
use uuid::Uuid;

use crate::backend::content::models::{Comment, Post};
use crate::backend::error::AppError;
use crate::backend::server::state::AppState;

fn parse_segment(params: &HashMap<String, String>, name: &'static str) -> Result<Uuid, AppError> {
    let raw = params
        .get(name)
        .ok_or_else(|| AppError::Internal(format!("route declares no {{{name}}} segment")))?;
    Uuid::parse_str(raw).map_err(|_| AppError::NotFound(name.into()))
}

/// Resolve the `{post}` segment and attach the loaded [`Post`].
pub async fn resolve_post(
    State(state): State<AppState>,
    Path(params): Path<HashMap<String, String>>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let id = parse_segment(&params, "post")?;
    let post = state
        .content
        .find_post(id)
        .await?
        .ok_or_else(|| AppError::NotFound("post".into()))?;

    request.extensions_mut().insert(post);
    Ok(next.run(request).await)
}

/// Resolve the `{comment}` segment and attach the loaded [`Comment`].
///
/// Independent of post resolution; it only needs the comment identifier.
pub async fn resolve_comment(
    State(state): State<AppState>,
    Path(params): Path<HashMap<String, String>>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let id = parse_segment(&params, "comment")?;
    let comment = state
        .content
        .find_comment(id)
        .await?
        .ok_or_else(|| AppError::NotFound("comment".into()))?;

    request.extensions_mut().insert(comment);
    Ok(next.run(request).await)
}

/// Extractor for the post loaded by [`resolve_post`].
#[derive(Debug, Clone)]
pub struct ResolvedPost(pub Post);

impl<S: Send + Sync> FromRequestParts<S> for ResolvedPost {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Post>()
            .cloned()
            .map(ResolvedPost)
            .ok_or_else(|| AppError::Internal("post was not resolved for this route".into()))
    }
}

/// Extractor for the comment loaded by [`resolve_comment`].
#[derive(Debug, Clone)]
pub struct ResolvedComment(pub Comment);

impl<S: Send + Sync> FromRequestParts<S> for ResolvedComment {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Comment>()
            .cloned()
            .map(ResolvedComment)
            .ok_or_else(|| AppError::Internal("comment was not resolved for this route".into()))
    }
}
