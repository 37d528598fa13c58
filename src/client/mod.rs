//! Client-side code.
//!
//! - **`api`** - HTTP wrapper over the server's routes
//! - **`session`** - file-backed session cache that persists the issued
//!   token and answers "who is logged in" without a network round trip

pub mod api;
pub mod session;

pub use api::{ApiClient, ClientError};
pub use session::SessionCache;
