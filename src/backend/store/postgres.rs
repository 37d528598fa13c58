//! PostgreSQL store.
//!
//! Upvotes are expressed as a single `SET upvotes = upvotes + 1` statement
//! so concurrent upvotes on the same row never lose updates. Comment
//! attachment writes the post's comment list and the comment row inside one
//! transaction; if either write fails the transaction rolls back and no
//! comment record exists.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::backend::auth::users::{User, UserStore};
use crate::backend::content::models::{Comment, Post};
use crate::backend::content::repository::ContentStore;
use crate::backend::error::{AppError, Result};

pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgStore {
    async fn insert_user(&self, user: User) -> Result<User> {
        // The unique constraint on username backs up the repository-level
        // pre-check; a concurrent duplicate surfaces as 23505 -> Conflict.
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, username, password_hash, password_salt, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, username, password_hash, password_salt, created_at
            "#,
        )
        .bind(user.id)
        .bind(&user.username)
        .bind(&user.password_hash)
        .bind(&user.password_salt)
        .bind(user.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, password_hash, password_salt, created_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }
}

#[async_trait]
impl ContentStore for PgStore {
    async fn list_posts(&self) -> Result<Vec<Post>> {
        let posts = sqlx::query_as::<_, Post>(
            r#"
            SELECT id, title, link, author, upvotes, comment_ids, created_at
            FROM posts
            ORDER BY created_at ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(posts)
    }

    async fn insert_post(&self, post: Post) -> Result<Post> {
        let post = sqlx::query_as::<_, Post>(
            r#"
            INSERT INTO posts (id, title, link, author, upvotes, comment_ids, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, title, link, author, upvotes, comment_ids, created_at
            "#,
        )
        .bind(post.id)
        .bind(&post.title)
        .bind(&post.link)
        .bind(&post.author)
        .bind(post.upvotes)
        .bind(&post.comment_ids)
        .bind(post.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(post)
    }

    async fn find_post(&self, id: Uuid) -> Result<Option<Post>> {
        let post = sqlx::query_as::<_, Post>(
            r#"
            SELECT id, title, link, author, upvotes, comment_ids, created_at
            FROM posts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(post)
    }

    async fn upvote_post(&self, id: Uuid) -> Result<Post> {
        let post = sqlx::query_as::<_, Post>(
            r#"
            UPDATE posts
            SET upvotes = upvotes + 1
            WHERE id = $1
            RETURNING id, title, link, author, upvotes, comment_ids, created_at
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        post.ok_or_else(|| AppError::NotFound("post".into()))
    }

    async fn attach_comment(&self, comment: Comment) -> Result<Comment> {
        let mut tx = self.pool.begin().await?;

        // Forward reference first: zero rows affected means the post does
        // not exist and nothing has been written yet.
        let updated = sqlx::query(
            r#"
            UPDATE posts
            SET comment_ids = array_append(comment_ids, $1)
            WHERE id = $2
            "#,
        )
        .bind(comment.id)
        .bind(comment.post_id)
        .execute(&mut *tx)
        .await?;

        if updated.rows_affected() == 0 {
            return Err(AppError::NotFound("post".into()));
        }

        let comment = sqlx::query_as::<_, Comment>(
            r#"
            INSERT INTO comments (id, post_id, body, author, upvotes, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, post_id, body, author, upvotes, created_at
            "#,
        )
        .bind(comment.id)
        .bind(comment.post_id)
        .bind(&comment.body)
        .bind(&comment.author)
        .bind(comment.upvotes)
        .bind(comment.created_at)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(comment)
    }

    async fn find_comment(&self, id: Uuid) -> Result<Option<Comment>> {
        let comment = sqlx::query_as::<_, Comment>(
            r#"
            SELECT id, post_id, body, author, upvotes, created_at
            FROM comments
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(comment)
    }

    async fn upvote_comment(&self, id: Uuid) -> Result<Comment> {
        let comment = sqlx::query_as::<_, Comment>(
            r#"
            UPDATE comments
            SET upvotes = upvotes + 1
            WHERE id = $1
            RETURNING id, post_id, body, author, upvotes, created_at
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        comment.ok_or_else(|| AppError::NotFound("comment".into()))
    }

    async fn comments_for_post(&self, post: &Post) -> Result<Vec<Comment>> {
        // Fetch by the post's forward references, then restore their order;
        // ANY($1) does not preserve array order by itself.
        let mut comments = sqlx::query_as::<_, Comment>(
            r#"
            SELECT id, post_id, body, author, upvotes, created_at
            FROM comments
            WHERE id = ANY($1)
            "#,
        )
        .bind(&post.comment_ids)
        .fetch_all(&self.pool)
        .await?;

        comments.sort_by_key(|c| {
            post.comment_ids
                .iter()
                .position(|id| *id == c.id)
                .unwrap_or(usize::MAX)
        });
        Ok(comments)
    }
}
