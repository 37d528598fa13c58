//! Environment-driven configuration.
//!
//! Configuration errors are logged but never fatal: a missing database
//! falls back to the in-memory store and a missing session secret falls
//! back to a development default with a loud warning.

use sqlx::PgPool;

/// Thirty days, matching the lifetime stamped into issued session tokens.
const DEFAULT_SESSION_TTL_SECS: u64 = 30 * 24 * 60 * 60;

const DEV_SECRET: &str = "insecure-dev-secret";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub database_url: Option<String>,
    pub session_secret: String,
    pub session_ttl_secs: u64,
    pub port: u16,
}

impl ServerConfig {
    /// Read configuration from the environment.
    ///
    /// - `DATABASE_URL` - PostgreSQL connection string, optional
    /// - `SESSION_SECRET` - HMAC key for session tokens
    /// - `SESSION_TTL_SECS` - token lifetime, default thirty days
    /// - `SERVER_PORT` - listen port, default 3000
    pub fn from_env() -> Self {
        let database_url = std::env::var("DATABASE_URL").ok();

        let session_secret = match std::env::var("SESSION_SECRET") {
            Ok(secret) if !secret.is_empty() => secret,
            _ => {
                tracing::warn!(
                    "SESSION_SECRET not set, using an insecure development default"
                );
                DEV_SECRET.to_string()
            }
        };

        let session_ttl_secs = std::env::var("SESSION_TTL_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_SESSION_TTL_SECS);

        let port = std::env::var("SERVER_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3000);

        Self {
            database_url,
            session_secret,
            session_ttl_secs,
            port,
        }
    }
}

/// Connect to PostgreSQL and run migrations.
///
/// Returns `None` on any failure so the caller can fall back to the
/// in-memory store instead of refusing to start.
pub async fn load_database(database_url: &str) -> Option<PgPool> {
    tracing::info!("connecting to database");

    let pool = match PgPool::connect(database_url).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("database connection failed: {e}");
            return None;
        }
    };

    if let Err(e) = sqlx::migrate!().run(&pool).await {
        tracing::error!("database migrations failed: {e}");
        return None;
    }

    tracing::info!("database ready");
    Some(pool)
}
