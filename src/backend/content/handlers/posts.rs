//! Post handlers.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;

use crate::backend::content::models::{Post, PostDetail};
use crate::backend::error::Result;
use crate::backend::middleware::auth::AuthUser;
use crate::backend::middleware::resolve::ResolvedPost;
use crate::backend::server::state::AppState;
use crate::shared::types::NewPost;

/// Handle `GET /posts`: every post, oldest first.
pub async fn list_posts(State(state): State<AppState>) -> Result<Json<Vec<Post>>> {
    let posts = state.content.list_posts().await?;
    Ok(Json(posts))
}

/// Handle `POST /posts`.
///
/// Requires authentication; the verified identity is stamped as the
/// post's author. Title validation happens in the repository.
pub async fn create_post(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(request): Json<NewPost>,
) -> Result<(StatusCode, Json<Post>)> {
    tracing::info!(author = %user.username, title = %request.title, "creating post");

    let post = state
        .content
        .create_post(&request.title, request.link, Some(user.username))
        .await?;

    Ok((StatusCode::CREATED, Json(post)))
}

/// Handle `GET /posts/{post}`: the resolved post with comments expanded.
pub async fn get_post(
    State(state): State<AppState>,
    ResolvedPost(post): ResolvedPost,
) -> Result<Json<PostDetail>> {
    let detail = state.content.expand(&post).await?;
    Ok(Json(detail))
}

/// Handle `PUT /posts/{post}/upvote`.
///
/// One increment per call, no de-duplication by caller identity.
pub async fn upvote_post(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    ResolvedPost(post): ResolvedPost,
) -> Result<Json<Post>> {
    tracing::info!(post = %post.id, by = %user.username, "upvoting post");

    let updated = state.content.upvote_post(post.id).await?;
    Ok(Json(updated))
}
