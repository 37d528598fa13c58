//! HTTP route configuration.
//!
//! # Routes
//!
//! | Method | Path | Auth |
//! |---|---|---|
//! | GET | `/posts` | no |
//! | POST | `/posts` | yes |
//! | GET | `/posts/{post}` | no |
//! | PUT | `/posts/{post}/upvote` | yes |
//! | POST | `/posts/{post}/comments` | yes |
//! | PUT | `/posts/{post}/comments/{comment}/upvote` | yes |
//! | POST | `/register` | no |
//! | POST | `/login` | no |

pub mod api_routes;
pub mod router;

pub use router::create_router;
