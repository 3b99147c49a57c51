//! Request extractors.
//!
//! - [`caller::ResolvedCaller`] -- Resolves the caller identity from a JWT Bearer token.

pub mod caller;
