//! Repository layer: one zero-sized struct per table with async query methods.

pub mod role_repo;

pub use role_repo::RoleRepo;
