//! Domain primitives shared by the store and the HTTP layer.
//!
//! Zero internal dependencies: nothing in here knows about sqlx or axum.

pub mod auth;
pub mod error;
pub mod roles;
pub mod types;
