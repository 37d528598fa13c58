//! Request middleware.
//!
//! Two layers run in front of protected handlers, always in this order:
//!
//! 1. **`auth`** - validates the bearer token and attaches the identity to
//!    the request. Pure computation; unauthenticated requests are rejected
//!    before any store access.
//! 2. **`resolve`** - loads the entities named by `{post}` / `{comment}`
//!    path segments into the request so handlers receive them already
//!    materialized.

pub mod auth;
pub mod resolve;

pub use auth::{require_auth, AuthUser, AuthenticatedUser};
pub use resolve::{resolve_comment, resolve_post, ResolvedComment, ResolvedPost};
