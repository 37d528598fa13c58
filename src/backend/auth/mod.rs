//! Authentication: credentials, session tokens, and their HTTP handlers.
//!
//! # Flow
//!
//! 1. **Register**: credentials validated, per-user salt derived, password
//!    hashed and stored, token issued.
//! 2. **Login**: stored credential verified, token issued.
//! 3. **Protected request**: token decoded and expiry-checked by the
//!    authorization middleware; the username claim becomes the request
//!    identity with no database lookup.
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt using an explicit random per-user
//!   salt; the raw password is never stored.
//! - Failed logins return 401 with a single message for both unknown
//!   username and wrong password (no user enumeration).
//! - Tokens are stateless; the server cannot invalidate one before expiry.

pub mod credentials;
pub mod handlers;
pub mod tokens;
pub mod users;

pub use credentials::CredentialStore;
pub use handlers::{login, register};
pub use tokens::{TokenError, TokenService};
pub use users::{User, UserStore};
