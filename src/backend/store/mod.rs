//! Store implementations behind the `UserStore` and `ContentStore` traits.
//!
//! - **`postgres`** - the production store (sqlx connection pool, schema in
//!   `migrations/`).
//! - **`memory`** - a process-local store for tests and for running the
//!   server without `DATABASE_URL`.

pub mod memory;
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;
