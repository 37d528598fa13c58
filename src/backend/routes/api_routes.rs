//! API route assembly.
//!
//! Routes are grouped by the middleware stack they need. Layer order
//! matters: `route_layer` wraps outside-in, so the authorization layer is
//! added last to run first, then post resolution, then comment resolution.
//! Unauthenticated mutating requests are therefore rejected before any
//! store lookup happens.

use axum::handler::Handler;
use axum::middleware::from_fn_with_state;
use axum::routing::{get, post, put};
use axum::Router;

use crate::backend::auth::handlers::{login, register};
use crate::backend::content::handlers::{
    add_comment, create_post, get_post, list_posts, upvote_comment, upvote_post,
};
use crate::backend::middleware::auth::require_auth;
use crate::backend::middleware::resolve::{resolve_comment, resolve_post};
use crate::backend::server::state::AppState;

/// Build the API routes against a shared [`AppState`].
pub fn configure_api_routes(state: AppState) -> Router<AppState> {
    let auth = from_fn_with_state(state.clone(), require_auth);
    let post_resolution = from_fn_with_state(state.clone(), resolve_post);
    let comment_resolution = from_fn_with_state(state, resolve_comment);

    // Credential endpoints and the post collection. Listing is public;
    // submitting requires identity but resolves nothing, so the auth layer
    // wraps only the POST handler.
    let collection = Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route(
            "/posts",
            get(list_posts).post(create_post.layer(auth.clone())),
        );

    // Reading a single post resolves it but needs no identity
    let read = Router::new()
        .route("/posts/{post}", get(get_post))
        .route_layer(post_resolution.clone());

    // Mutations on a resolved post: auth runs first, then resolution
    let post_mutations = Router::new()
        .route("/posts/{post}/upvote", put(upvote_post))
        .route("/posts/{post}/comments", post(add_comment))
        .route_layer(post_resolution.clone())
        .route_layer(auth.clone());

    // Comment upvote: auth, then post resolution, then comment resolution
    let comment_mutations = Router::new()
        .route(
            "/posts/{post}/comments/{comment}/upvote",
            put(upvote_comment),
        )
        .route_layer(comment_resolution)
        .route_layer(post_resolution)
        .route_layer(auth);

    collection
        .merge(read)
        .merge(post_mutations)
        .merge(comment_mutations)
}
