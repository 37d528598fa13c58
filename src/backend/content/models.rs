//! Domain models for posts and comments.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A submitted content item.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Post {
    pub id: Uuid,
    /// Required, non-empty
    pub title: String,
    /// Optional URL the post points at
    pub link: Option<String>,
    /// Username of the submitter; `None` for posts created before
    /// submissions required authentication
    pub author: Option<String>,
    /// Never negative; incremented by exactly one per upvote call
    pub upvotes: i64,
    /// Ordered forward references to the post's comments
    pub comment_ids: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
}

/// A comment on a post. Mutated only by upvote increments.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Comment {
    pub id: Uuid,
    /// Back reference to the owning post
    pub post_id: Uuid,
    /// Required, non-empty
    pub body: String,
    /// Username of the commenter
    pub author: String,
    pub upvotes: i64,
    pub created_at: DateTime<Utc>,
}

/// A post with its comment references expanded to full comments, in append
/// order. This is the read shape for `GET /posts/{post}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostDetail {
    #[serde(flatten)]
    pub post: Post,
    pub comments: Vec<Comment>,
}
