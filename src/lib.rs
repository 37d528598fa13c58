//! # linkboard
//!
//! A small content-sharing service. Users register, authenticate, submit
//! posts (title + link), comment on posts, and upvote posts and comments.
//!
//! The crate is organized into three top-level modules:
//!
//! - **`backend`** - the Axum HTTP server: credential store, token service,
//!   authorization middleware, entity-resolution pipeline, and the content
//!   repository over a pluggable store (PostgreSQL or in-memory).
//! - **`client`** - the HTTP client and the local session cache that holds
//!   the issued token and derives "logged in" state offline.
//! - **`shared`** - types and pure functions used by both sides, most
//!   importantly the token claims and the expiry check. Keeping the expiry
//!   check in one place guarantees client and server agree on validity.
//!
//! Authentication is stateless: the server keeps no session table. A login
//! or registration yields a signed token carrying `{username, exp}`; every
//! mutating request presents it as `Authorization: Bearer <token>`.

pub mod backend;
pub mod client;
pub mod shared;
