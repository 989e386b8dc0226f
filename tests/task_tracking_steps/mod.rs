//! Step definitions for task tracking BDD scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
