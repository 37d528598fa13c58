//! HTTP handlers for `POST /register` and `POST /login`.
//!
//! Both take `{username, password}` and answer `{token}`; the client holds
//! the token for its natural lifetime and the server keeps no record of it.

pub mod login;
pub mod register;

pub use login::login;
pub use register::register;
