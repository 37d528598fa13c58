//! HTTP handlers for the content routes.
//!
//! Handlers receive already-materialized entities from the resolution
//! layers and the request identity from the authorization layer; they only
//! coordinate the repository call and shape the response.

pub mod comments;
pub mod posts;

pub use comments::{add_comment, upvote_comment};
pub use posts::{create_post, get_post, list_posts, upvote_post};
