//! In-memory store.
//!
//! Backs tests and DB-less development runs. A single mutex over the whole
//! state makes every operation atomic, matching the store-level atomicity
//! the PostgreSQL implementation gets from `UPDATE ... SET x = x + 1` and
//! transactions.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use crate::backend::auth::users::{User, UserStore};
use crate::backend::content::models::{Comment, Post};
use crate::backend::content::repository::ContentStore;
use crate::backend::error::{AppError, Result};

#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    users: HashMap<String, User>,
    posts: HashMap<Uuid, Post>,
    comments: HashMap<Uuid, Comment>,
}

impl MemoryStore {
    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Inner>> {
        self.inner
            .lock()
            .map_err(|_| AppError::Internal("store lock poisoned".into()))
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn insert_user(&self, user: User) -> Result<User> {
        let mut inner = self.lock()?;
        if inner.users.contains_key(&user.username) {
            return Err(AppError::Conflict("resource already exists".into()));
        }
        inner.users.insert(user.username.clone(), user.clone());
        Ok(user)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        Ok(self.lock()?.users.get(username).cloned())
    }
}

#[async_trait]
impl ContentStore for MemoryStore {
    async fn list_posts(&self) -> Result<Vec<Post>> {
        let mut posts: Vec<Post> = self.lock()?.posts.values().cloned().collect();
        posts.sort_by_key(|p| p.created_at);
        Ok(posts)
    }

    async fn insert_post(&self, post: Post) -> Result<Post> {
        self.lock()?.posts.insert(post.id, post.clone());
        Ok(post)
    }

    async fn find_post(&self, id: Uuid) -> Result<Option<Post>> {
        Ok(self.lock()?.posts.get(&id).cloned())
    }

    async fn upvote_post(&self, id: Uuid) -> Result<Post> {
        let mut inner = self.lock()?;
        let post = inner
            .posts
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound("post".into()))?;
        post.upvotes += 1;
        Ok(post.clone())
    }

    async fn attach_comment(&self, comment: Comment) -> Result<Comment> {
        let mut inner = self.lock()?;
        // Both writes happen under one lock: the post's forward reference
        // and the comment record cannot diverge.
        let post = inner
            .posts
            .get_mut(&comment.post_id)
            .ok_or_else(|| AppError::NotFound("post".into()))?;
        post.comment_ids.push(comment.id);
        inner.comments.insert(comment.id, comment.clone());
        Ok(comment)
    }

    async fn find_comment(&self, id: Uuid) -> Result<Option<Comment>> {
        Ok(self.lock()?.comments.get(&id).cloned())
    }

    async fn upvote_comment(&self, id: Uuid) -> Result<Comment> {
        let mut inner = self.lock()?;
        let comment = inner
            .comments
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound("comment".into()))?;
        comment.upvotes += 1;
        Ok(comment.clone())
    }

    async fn comments_for_post(&self, post: &Post) -> Result<Vec<Comment>> {
        let inner = self.lock()?;
        Ok(post
            .comment_ids
            .iter()
            .filter_map(|id| inner.comments.get(id).cloned())
            .collect())
    }
}
