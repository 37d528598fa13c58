//! User model and the user persistence contract.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::backend::error::Result;

/// A registered user.
///
/// Created at registration and never mutated afterwards. The password is
/// represented only by its salted hash; it can be verified but not
/// retrieved.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    /// Unique across the store
    pub username: String,
    /// bcrypt hash computed with `password_salt`
    pub password_hash: String,
    /// Per-user random salt, base64-encoded
    pub password_salt: String,
    pub created_at: DateTime<Utc>,
}

/// Persistence contract for users.
///
/// The store enforces username uniqueness; `insert_user` fails with
/// `Conflict` when the username is already taken.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn insert_user(&self, user: User) -> Result<User>;
    async fn find_by_username(&self, username: &str) -> Result<Option<User>>;
}
