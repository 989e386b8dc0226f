//! Todorail: the functional core of a multi-user task tracker.
//!
//! This crate provides the domain services behind a small to-do web
//! application: user registration and lookup, task CRUD, and the derived
//! pending / completed / due-today task views. The HTTP layer, session
//! middleware, and password verification pipeline live in the host
//! application and consume these services.
//!
//! # Architecture
//!
//! Todorail follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, hashing)
//!
//! # Modules
//!
//! - [`task`]: Task records, uniqueness rules, and filtered task views
//! - [`user`]: User accounts, registration, and credential lookup
//! - [`error`]: Shared failure classification for presentation mapping

pub mod error;
pub mod task;
pub mod user;
