//! Posts, comments, and their mutation operations.
//!
//! The repository owns the entity semantics (validation, author stamping,
//! increment rules); the actual reads and writes go through the
//! [`ContentStore`](repository::ContentStore) query interface so the same
//! logic runs against PostgreSQL or the in-memory store.

pub mod handlers;
pub mod models;
pub mod repository;

pub use models::{Comment, Post, PostDetail};
pub use repository::{ContentRepository, ContentStore};
