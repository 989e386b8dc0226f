//! Task tracking for Todorail.
//!
//! This module implements the task half of the tracker core: creating task
//! records with unique titles, retrieving them by id or title, updating and
//! deleting them by title resolution, and deriving the pending, completed,
//! and due-today views by filtering the full task list. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
