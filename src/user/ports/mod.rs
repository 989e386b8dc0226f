//! Port contracts for user persistence and credential hashing.
//!
//! Ports define infrastructure-agnostic interfaces used by the account
//! service.

pub mod hasher;
pub mod repository;

pub use hasher::PasswordHasher;
pub use repository::{UserRepository, UserRepositoryError, UserRepositoryResult};
