//! Domain model for task records.
//!
//! The task domain models a single to-do item: a globally unique title, a
//! free-form description, a completion flag, and an optional due date. All
//! infrastructure concerns are kept outside the domain boundary.

mod error;
mod ids;
mod record;
mod title;

pub use error::TaskDomainError;
pub use ids::TaskId;
pub use record::{PersistedTaskData, Task};
pub use title::TaskTitle;
