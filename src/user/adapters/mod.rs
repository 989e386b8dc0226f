//! Persistence and hashing adapters for the user module.
//!
//! - [`memory::InMemoryUserRepository`]: Thread-safe in-memory storage for
//!   unit testing
//! - [`postgres::PostgresUserRepository`]: Production-grade `PostgreSQL`
//!   persistence using Diesel ORM
//! - [`hasher::SaltedSha256Hasher`]: Salted SHA-256 password encoding

pub mod hasher;
pub mod memory;
pub mod postgres;
