//! Persistence adapters for the task module.
//!
//! - [`memory::InMemoryTaskRepository`]: Thread-safe in-memory storage for
//!   unit testing
//! - [`postgres::PostgresTaskRepository`]: Production-grade `PostgreSQL`
//!   persistence using Diesel ORM

pub mod memory;
pub mod postgres;
