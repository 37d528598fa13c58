//! Comment handlers.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;

use crate::backend::content::models::Comment;
use crate::backend::error::Result;
use crate::backend::middleware::auth::AuthUser;
use crate::backend::middleware::resolve::{ResolvedComment, ResolvedPost};
use crate::backend::server::state::AppState;
use crate::shared::types::NewComment;

/// Handle `POST /posts/{post}/comments`.
///
/// The comment and the post's comment-list entry are written as one unit;
/// body validation happens in the repository.
pub async fn add_comment(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    ResolvedPost(post): ResolvedPost,
    Json(request): Json<NewComment>,
) -> Result<(StatusCode, Json<Comment>)> {
    tracing::info!(post = %post.id, author = %user.username, "adding comment");

    let comment = state
        .content
        .add_comment(post.id, &request.body, &user.username)
        .await?;

    Ok((StatusCode::CREATED, Json(comment)))
}

/// Handle `PUT /posts/{post}/comments/{comment}/upvote`.
pub async fn upvote_comment(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    ResolvedComment(comment): ResolvedComment,
) -> Result<Json<Comment>> {
    tracing::info!(comment = %comment.id, by = %user.username, "upvoting comment");

    let updated = state.content.upvote_comment(comment.id).await?;
    Ok(Json(updated))
}
