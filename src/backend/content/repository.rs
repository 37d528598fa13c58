//! The content repository and its store contract.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::backend::content::models::{Comment, Post, PostDetail};
use crate::backend::error::{AppError, Result};

/// Persistence contract for posts and comments — the query interface the
/// repository drives. Implementations: `store::postgres::PgStore`,
/// `store::memory::MemoryStore`.
#[async_trait]
pub trait ContentStore: Send + Sync {
    async fn list_posts(&self) -> Result<Vec<Post>>;
    async fn insert_post(&self, post: Post) -> Result<Post>;
    async fn find_post(&self, id: Uuid) -> Result<Option<Post>>;

    /// Atomic store-level increment; fails with `NotFound` for unknown ids.
    async fn upvote_post(&self, id: Uuid) -> Result<Post>;

    /// Persist the comment and append its id to the owning post's comment
    /// list as one unit: if either write fails, neither sticks. Fails with
    /// `NotFound` when the post does not exist, creating no comment record.
    async fn attach_comment(&self, comment: Comment) -> Result<Comment>;

    async fn find_comment(&self, id: Uuid) -> Result<Option<Comment>>;
    async fn upvote_comment(&self, id: Uuid) -> Result<Comment>;

    /// The post's comments, expanded in the order the post references them.
    async fn comments_for_post(&self, post: &Post) -> Result<Vec<Comment>>;
}

/// Owns Post and Comment semantics: validation, author stamping, and the
/// increment rules. Upvotes are deliberately not idempotent and carry no
/// per-user de-duplication; repeated calls keep incrementing.
#[derive(Clone)]
pub struct ContentRepository {
    store: Arc<dyn ContentStore>,
}

impl ContentRepository {
    pub fn new(store: Arc<dyn ContentStore>) -> Self {
        Self { store }
    }

    pub async fn list_posts(&self) -> Result<Vec<Post>> {
        self.store.list_posts().await
    }

    pub async fn find_post(&self, id: Uuid) -> Result<Option<Post>> {
        self.store.find_post(id).await
    }

    pub async fn find_comment(&self, id: Uuid) -> Result<Option<Comment>> {
        self.store.find_comment(id).await
    }

    /// Create a post. Title presence is validated here — the server is the
    /// authoritative guard regardless of what clients check.
    pub async fn create_post(
        &self,
        title: &str,
        link: Option<String>,
        author: Option<String>,
    ) -> Result<Post> {
        if title.trim().is_empty() {
            return Err(AppError::Validation("title is required".into()));
        }

        let post = Post {
            id: Uuid::new_v4(),
            title: title.to_string(),
            link,
            author,
            upvotes: 0,
            comment_ids: Vec::new(),
            created_at: Utc::now(),
        };
        self.store.insert_post(post).await
    }

    /// Increment a post's upvote counter by exactly one.
    pub async fn upvote_post(&self, id: Uuid) -> Result<Post> {
        self.store.upvote_post(id).await
    }

    /// Create a comment on a post and append it to the post's comment list.
    pub async fn add_comment(&self, post_id: Uuid, body: &str, author: &str) -> Result<Comment> {
        if body.trim().is_empty() {
            return Err(AppError::Validation("comment body is required".into()));
        }

        let comment = Comment {
            id: Uuid::new_v4(),
            post_id,
            body: body.to_string(),
            author: author.to_string(),
            upvotes: 0,
            created_at: Utc::now(),
        };
        self.store.attach_comment(comment).await
    }

    /// Increment a comment's upvote counter by exactly one.
    pub async fn upvote_comment(&self, id: Uuid) -> Result<Comment> {
        self.store.upvote_comment(id).await
    }

    /// Expand a loaded post into its read shape with full comments.
    pub async fn expand(&self, post: &Post) -> Result<PostDetail> {
        let comments = self.store.comments_for_post(post).await?;
        Ok(PostDetail {
            post: post.clone(),
            comments,
        })
    }
}
