//! Credential storage and verification.
//!
//! Registration derives a cryptographically random per-user salt and a
//! bcrypt hash computed with that salt; both are stored, the raw password
//! never is. Verification recomputes the hash against the stored credential
//! with bcrypt's constant-shape comparison.

use std::sync::Arc;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use bcrypt::{hash_with_salt, verify, Version, DEFAULT_COST};
use chrono::Utc;
use rand::Rng;
use uuid::Uuid;

use crate::backend::auth::users::{User, UserStore};
use crate::backend::error::{AppError, Result};

/// Message returned for any failed login.
///
/// Deliberately the same for an unknown username and a wrong password so
/// responses cannot be used to enumerate accounts.
const BAD_CREDENTIALS: &str = "invalid username or password";

/// Holds usernames and salted password hashes; verifies passwords.
#[derive(Clone)]
pub struct CredentialStore {
    users: Arc<dyn UserStore>,
    cost: u32,
}

impl CredentialStore {
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self {
            users,
            cost: DEFAULT_COST,
        }
    }

    /// Override the bcrypt cost factor. Tests use the minimum cost to keep
    /// hashing fast; production keeps [`DEFAULT_COST`].
    pub fn with_cost(mut self, cost: u32) -> Self {
        self.cost = cost;
        self
    }

    /// Register a new user.
    ///
    /// # Errors
    ///
    /// - `Validation` if either field is empty
    /// - `Conflict` if the username is already taken (checked here and
    ///   enforced again by the store's uniqueness constraint)
    /// - `Internal` if hashing or the store fails
    pub async fn register(&self, username: &str, password: &str) -> Result<User> {
        if username.trim().is_empty() || password.is_empty() {
            return Err(AppError::Validation("please fill out all fields".into()));
        }

        if self.users.find_by_username(username).await?.is_some() {
            tracing::warn!(username, "registration rejected: username taken");
            return Err(AppError::Conflict("username already taken".into()));
        }

        let salt: [u8; 16] = rand::rng().random();
        let hash = hash_with_salt(password, self.cost, salt)
            .map_err(|e| {
                tracing::error!("password hashing failed: {e:?}");
                AppError::Internal("password hashing failed".into())
            })?
            .format_for_version(Version::TwoB);

        let user = User {
            id: Uuid::new_v4(),
            username: username.to_string(),
            password_hash: hash,
            password_salt: BASE64.encode(salt),
            created_at: Utc::now(),
        };

        let user = self.users.insert_user(user).await?;
        tracing::info!(username = %user.username, "user registered");
        Ok(user)
    }

    /// Verify a username/password pair, returning the user on match.
    ///
    /// Fails with `Unauthenticated` and a single message for both unknown
    /// user and wrong password.
    pub async fn verify(&self, username: &str, password: &str) -> Result<User> {
        let user = self
            .users
            .find_by_username(username)
            .await?
            .ok_or_else(|| {
                tracing::warn!(username, "login rejected: unknown username");
                AppError::Unauthenticated(BAD_CREDENTIALS.into())
            })?;

        let valid = verify(password, &user.password_hash).map_err(|e| {
            tracing::error!("password verification failed: {e:?}");
            AppError::Internal("password verification failed".into())
        })?;

        if !valid {
            tracing::warn!(username, "login rejected: wrong password");
            return Err(AppError::Unauthenticated(BAD_CREDENTIALS.into()));
        }

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::store::memory::MemoryStore;

    /// Minimum bcrypt cost; `bcrypt::MIN_COST` is private in bcrypt 0.17.
    const MIN_COST: u32 = 4;

    fn store() -> CredentialStore {
        CredentialStore::new(Arc::new(MemoryStore::default())).with_cost(MIN_COST)
    }

    #[tokio::test]
    async fn register_then_verify_succeeds() {
        let creds = store();
        let registered = creds.register("alice", "secret123").await.unwrap();
        assert_eq!(registered.username, "alice");

        let verified = creds.verify("alice", "secret123").await.unwrap();
        assert_eq!(verified.id, registered.id);
    }

    #[tokio::test]
    async fn wrong_password_is_rejected() {
        let creds = store();
        creds.register("alice", "secret123").await.unwrap();

        let err = creds.verify("alice", "wrong").await.unwrap_err();
        assert!(matches!(err, AppError::Unauthenticated(_)));
    }

    #[tokio::test]
    async fn unknown_user_gets_same_message_as_wrong_password() {
        let creds = store();
        creds.register("alice", "secret123").await.unwrap();

        let unknown = creds.verify("bob", "secret123").await.unwrap_err();
        let wrong = creds.verify("alice", "nope").await.unwrap_err();
        assert_eq!(unknown.message(), wrong.message());
    }

    #[tokio::test]
    async fn duplicate_username_conflicts() {
        let creds = store();
        creds.register("alice", "secret123").await.unwrap();

        let err = creds.register("alice", "other").await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn empty_fields_fail_validation() {
        let creds = store();
        for (u, p) in [("", "secret123"), ("alice", ""), ("  ", "secret123")] {
            let err = creds.register(u, p).await.unwrap_err();
            assert!(matches!(err, AppError::Validation(_)), "{u:?}/{p:?}");
        }
    }

    #[tokio::test]
    async fn salts_are_unique_per_user() {
        let creds = store();
        let a = creds.register("alice", "same-password").await.unwrap();
        let b = creds.register("bob", "same-password").await.unwrap();
        assert_ne!(a.password_salt, b.password_salt);
        assert_ne!(a.password_hash, b.password_hash);
    }

    #[tokio::test]
    async fn raw_password_is_not_stored() {
        let creds = store();
        let user = creds.register("alice", "secret123").await.unwrap();
        assert!(!user.password_hash.contains("secret123"));
    }
}
