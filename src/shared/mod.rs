//! Types shared between the backend and the client.
//!
//! The session claims and the expiry check live here so that the server's
//! authorization middleware and the client's offline session cache evaluate
//! token validity with the same code. The client check is an optimistic UI
//! signal; the server check is the authoritative gate.

pub mod session;
pub mod types;

pub use session::{is_expired, peek_claims, unix_now, Claims};
