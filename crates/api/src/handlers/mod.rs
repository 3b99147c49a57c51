//! Request handlers.
//!
//! Handlers stay thin: they extract the caller, path and body, and delegate
//! to the service held in [`crate::state::AppState`].

pub mod roles;
