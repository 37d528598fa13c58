//! Server-side code.
//!
//! The backend is organized into focused submodules:
//!
//! - **`server`** - initialization, application state, configuration
//! - **`routes`** - route configuration and router assembly
//! - **`auth`** - credentials, session tokens, user storage
//! - **`content`** - posts, comments, upvotes
//! - **`store`** - PostgreSQL and in-memory storage backends
//! - **`middleware`** - authorization and entity resolution layers
//! - **`error`** - error taxonomy and HTTP mapping

pub mod auth;
pub mod content;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod store;

pub use error::{AppError, Result};
pub use routes::create_router;
pub use server::{create_app, AppState, ServerConfig};
