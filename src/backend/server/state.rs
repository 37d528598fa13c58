//! Application state.

use std::sync::Arc;

use crate::backend::auth::credentials::CredentialStore;
use crate::backend::auth::tokens::TokenService;
use crate::backend::auth::users::UserStore;
use crate::backend::content::repository::{ContentRepository, ContentStore};
use crate::backend::store::memory::MemoryStore;

/// Central state container shared by every handler and middleware layer.
///
/// All fields are cheap to clone: the services hold `Arc`s to the
/// underlying stores and the token keys are reference-counted internally.
#[derive(Clone)]
pub struct AppState {
    pub credentials: CredentialStore,
    pub content: ContentRepository,
    pub tokens: TokenService,
}

impl AppState {
    pub fn new(
        users: Arc<dyn UserStore>,
        content: Arc<dyn ContentStore>,
        tokens: TokenService,
    ) -> Self {
        Self {
            credentials: CredentialStore::new(users),
            content: ContentRepository::new(content),
            tokens,
        }
    }

    /// State backed entirely by the in-memory store. Used when no database
    /// is configured and throughout the test suite.
    pub fn in_memory(tokens: TokenService) -> Self {
        let store = Arc::new(MemoryStore::default());
        Self::new(store.clone(), store, tokens)
    }

    /// Lower the password hashing cost. Only sensible in tests, where the
    /// default cost dominates runtime.
    pub fn with_hash_cost(mut self, cost: u32) -> Self {
        self.credentials = self.credentials.with_cost(cost);
        self
    }
}
