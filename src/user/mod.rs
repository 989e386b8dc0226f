//! User accounts for Todorail.
//!
//! This module implements the user half of the tracker core: registering
//! accounts with unique usernames and email addresses, hashing credentials
//! before persistence, and looking accounts up for the authentication
//! middleware. The module follows hexagonal architecture:
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
