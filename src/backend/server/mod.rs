//! Server wiring.
//!
//! - **`state`** - application state shared across handlers
//! - **`config`** - environment-driven configuration
//! - **`init`** - app creation against the configured stores

pub mod config;
pub mod init;
pub mod state;

pub use config::ServerConfig;
pub use init::create_app;
pub use state::AppState;
