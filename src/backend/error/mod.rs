//! Backend error types.
//!
//! One taxonomy covers the whole request path: validation, authentication,
//! missing entities, conflicts, and infrastructure failures. Handlers and
//! middleware return `AppError` and the conversion module turns it into a
//! JSON HTTP response.

pub mod conversion;
pub mod types;

pub use types::AppError;

/// Result alias used across the backend.
pub type Result<T> = std::result::Result<T, AppError>;
