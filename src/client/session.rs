//! Local session cache.
//!
//! A small JSON key-value file holding the issued session token. Identity
//! is derived from the token itself: the cache decodes the claims payload
//! locally and applies the shared expiry check, so "logged in" can be
//! answered offline. The server remains the authority; an expired or
//! tampered token is simply treated as logged out here and rejected there.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::shared::{is_expired, peek_claims, unix_now};

const TOKEN_KEY: &str = "token";

/// File-backed session store.
#[derive(Debug, Clone)]
pub struct SessionCache {
    path: PathBuf,
}

impl SessionCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> HashMap<String, String> {
        std::fs::read_to_string(&self.path)
            .ok()
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }

    fn store(&self, entries: &HashMap<String, String>) -> std::io::Result<()> {
        let raw = serde_json::to_string_pretty(entries)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        std::fs::write(&self.path, raw)
    }

    /// Persist a freshly issued token.
    pub fn save_token(&self, token: &str) -> std::io::Result<()> {
        let mut entries = self.load();
        entries.insert(TOKEN_KEY.to_string(), token.to_string());
        self.store(&entries)
    }

    /// The stored token, if any. No validity check; callers that need one
    /// use [`SessionCache::current_user`].
    pub fn token(&self) -> Option<String> {
        self.load().get(TOKEN_KEY).cloned()
    }

    /// The username from the stored token, if the token is present,
    /// well-formed, and not yet expired.
    pub fn current_user(&self) -> Option<String> {
        let token = self.token()?;
        let claims = peek_claims(&token)?;
        if is_expired(&claims, unix_now()) {
            return None;
        }
        Some(claims.username)
    }

    pub fn is_logged_in(&self) -> bool {
        self.current_user().is_some()
    }

    /// Drop the stored token. Other entries in the cache file survive.
    pub fn log_out(&self) -> std::io::Result<()> {
        let mut entries = self.load();
        if entries.remove(TOKEN_KEY).is_some() {
            self.store(&entries)?;
        }
        Ok(())
    }
}
