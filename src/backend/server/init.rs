//! App creation.

use std::sync::Arc;

use axum::Router;

use crate::backend::auth::tokens::TokenService;
use crate::backend::routes::create_router;
use crate::backend::server::config::{load_database, ServerConfig};
use crate::backend::server::state::AppState;
use crate::backend::store::postgres::PgStore;

/// Build the application router from configuration.
///
/// Prefers PostgreSQL when `DATABASE_URL` is set and reachable; otherwise
/// serves from the in-memory store, which loses everything on restart.
pub async fn create_app(config: &ServerConfig) -> Router {
    let tokens = TokenService::new(&config.session_secret, config.session_ttl_secs);

    let state = match &config.database_url {
        Some(url) => match load_database(url).await {
            Some(pool) => {
                let store = Arc::new(PgStore::new(pool));
                AppState::new(store.clone(), store, tokens)
            }
            None => {
                tracing::warn!("falling back to the in-memory store");
                AppState::in_memory(tokens)
            }
        },
        None => {
            tracing::warn!("DATABASE_URL not set, serving from the in-memory store");
            AppState::in_memory(tokens)
        }
    };

    create_router(state)
}
