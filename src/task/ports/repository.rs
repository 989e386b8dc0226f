//! Repository port for task persistence and lookup.

use crate::task::domain::{Task, TaskId, TaskTitle};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
///
/// Implementations must enforce the unique constraint on task titles at the
/// storage layer; the service-level uniqueness check and the save that
/// follows it are not atomic, and the storage constraint is the only
/// backstop against concurrent duplicate writes.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Persists the task, assigning an identifier when the record has none
    /// and updating the existing row otherwise. Returns the stored record.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateTitle`] when the unique title
    /// constraint rejects the write, or [`TaskRepositoryError::NotFound`]
    /// when the record carries an identifier that no longer exists.
    async fn save(&self, task: &Task) -> TaskRepositoryResult<Task>;

    /// Removes the row matching the record's identifier. Records without an
    /// identifier are ignored.
    async fn delete(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Finds a task by store-assigned identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Finds a task by its unique title. Matching is exact and
    /// case-sensitive.
    ///
    /// Returns `None` when no task has the given title.
    async fn find_by_title(&self, title: &TaskTitle) -> TaskRepositoryResult<Option<Task>>;

    /// Returns every stored task, in store iteration order.
    async fn find_all(&self) -> TaskRepositoryResult<Vec<Task>>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// A task with the same title already exists.
    #[error("duplicate task title: {0}")]
    DuplicateTitle(TaskTitle),

    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Persisted data could not be reconstructed into domain types.
    #[error("invalid persisted data: {0}")]
    InvalidPersistedData(Arc<dyn std::error::Error + Send + Sync>),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a data-quality or deserialization error from persisted rows.
    pub fn invalid_persisted_data(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidPersistedData(Arc::new(err))
    }

    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
