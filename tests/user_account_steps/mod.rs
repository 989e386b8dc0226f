//! Step definitions for user account BDD scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
