//! Error types for task domain validation.

use thiserror::Error;

/// Errors returned while constructing task domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The task title exceeds the 255-character storage limit.
    #[error("task title exceeds 255 character limit: {0}")]
    TitleTooLong(String),

    /// The task description is empty after trimming.
    #[error("task description must not be empty")]
    EmptyDescription,
}
