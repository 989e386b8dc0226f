//! Service layer for task creation, lookup, mutation, and filtered views.
//!
//! Provides [`TaskTrackingService`] which enforces the unique-title rule,
//! resolves update and delete targets by title, and derives the pending,
//! completed, and due-today listings by filtering the full task list.

use crate::error::ErrorKind;
use crate::task::{
    domain::{Task, TaskDomainError, TaskId, TaskTitle},
    ports::{TaskRepository, TaskRepositoryError},
};
use chrono::NaiveDate;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a new task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: String,
    due_date: Option<NaiveDate>,
}

impl CreateTaskRequest {
    /// Creates a request with the required task fields.
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            due_date: None,
        }
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }
}

/// Request payload for updating an existing task, resolved by title.
///
/// The title must match an existing record exactly; renaming a task through
/// update is not supported because resolution is by title rather than id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    title: String,
    description: String,
    completed: bool,
    due_date: Option<NaiveDate>,
}

impl UpdateTaskRequest {
    /// Creates a request replacing the description of the task with the
    /// given title, leaving it pending with no due date.
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            completed: false,
            due_date: None,
        }
    }

    /// Sets the replacement completion flag.
    #[must_use]
    pub const fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    /// Sets the replacement due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }
}

/// Service-level errors for task tracking operations.
#[derive(Debug, Error)]
pub enum TaskTrackingError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),

    /// A task with the requested title already exists.
    #[error("task already exists with title: {0}")]
    TitleTaken(TaskTitle),

    /// No task has the requested identifier.
    #[error("task not found with id: {0}")]
    IdNotFound(TaskId),

    /// No task has the requested title.
    #[error("task not found with title: {0}")]
    TitleNotFound(String),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

impl TaskTrackingError {
    /// Classifies the failure for presentation-layer mapping.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::TitleTaken(_) | Self::Repository(TaskRepositoryError::DuplicateTitle(_)) => {
                ErrorKind::AlreadyExists
            }
            Self::IdNotFound(_)
            | Self::TitleNotFound(_)
            | Self::Repository(TaskRepositoryError::NotFound(_)) => ErrorKind::NotFound,
            Self::Domain(_)
            | Self::Repository(
                TaskRepositoryError::InvalidPersistedData(_) | TaskRepositoryError::Persistence(_),
            ) => ErrorKind::Other,
        }
    }
}

/// Result type for task tracking service operations.
pub type TaskTrackingResult<T> = Result<T, TaskTrackingError>;

/// Task tracking orchestration service.
#[derive(Clone)]
pub struct TaskTrackingService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TaskTrackingService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task tracking service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates and persists a new pending task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskTrackingError::TitleTaken`] when a task with the same
    /// title already exists, [`TaskTrackingError::Domain`] when the payload
    /// fails validation, or [`TaskTrackingError::Repository`] when
    /// persistence fails.
    pub async fn add_task(&self, request: CreateTaskRequest) -> TaskTrackingResult<Task> {
        let CreateTaskRequest {
            title,
            description,
            due_date,
        } = request;

        let task_title = TaskTitle::new(title)?;
        if self.repository.find_by_title(&task_title).await?.is_some() {
            return Err(TaskTrackingError::TitleTaken(task_title));
        }

        let task = Task::new(task_title, description, due_date)?;
        Ok(self.repository.save(&task).await?)
    }

    /// Retrieves a task by store-assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskTrackingError::IdNotFound`] when no task has the given
    /// identifier.
    pub async fn task_by_id(&self, id: TaskId) -> TaskTrackingResult<Task> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(TaskTrackingError::IdNotFound(id))
    }

    /// Retrieves a task by exact, case-sensitive title match.
    ///
    /// # Errors
    ///
    /// Returns [`TaskTrackingError::TitleNotFound`] when no task has the
    /// given title, or [`TaskTrackingError::Domain`] when the title string
    /// fails validation.
    pub async fn task_by_title(&self, title: &str) -> TaskTrackingResult<Task> {
        let task_title = TaskTitle::new(title)?;
        self.repository
            .find_by_title(&task_title)
            .await?
            .ok_or_else(|| TaskTrackingError::TitleNotFound(title.to_owned()))
    }

    /// Returns every task. An empty store yields an empty vector, never a
    /// failure.
    ///
    /// # Errors
    ///
    /// Returns [`TaskTrackingError::Repository`] when the listing read
    /// fails.
    pub async fn all_tasks(&self) -> TaskTrackingResult<Vec<Task>> {
        Ok(self.repository.find_all().await?)
    }

    /// Updates the task whose title matches the request, replacing its
    /// description, completion flag, and due date while preserving its
    /// identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskTrackingError::TitleNotFound`] when no task has the
    /// request title, [`TaskTrackingError::Domain`] when the payload fails
    /// validation, or [`TaskTrackingError::Repository`] when persistence
    /// fails.
    pub async fn update_task(&self, request: UpdateTaskRequest) -> TaskTrackingResult<Task> {
        let UpdateTaskRequest {
            title,
            description,
            completed,
            due_date,
        } = request;

        let mut resolved = self.task_by_title(&title).await?;
        resolved.revise(description, completed, due_date)?;
        Ok(self.repository.save(&resolved).await?)
    }

    /// Marks the task with the given identifier as completed and persists
    /// the change.
    ///
    /// # Errors
    ///
    /// Returns [`TaskTrackingError::IdNotFound`] when no task has the given
    /// identifier, or [`TaskTrackingError::Repository`] when persistence
    /// fails.
    pub async fn complete_task(&self, id: TaskId) -> TaskTrackingResult<Task> {
        let mut resolved = self.task_by_id(id).await?;
        resolved.mark_completed();
        Ok(self.repository.save(&resolved).await?)
    }

    /// Deletes the task whose title matches exactly. The resolved record is
    /// removed, not the caller's input.
    ///
    /// # Errors
    ///
    /// Returns [`TaskTrackingError::TitleNotFound`] when no task has the
    /// given title, or [`TaskTrackingError::Repository`] when the delete
    /// fails.
    pub async fn delete_task(&self, title: &str) -> TaskTrackingResult<()> {
        let resolved = self.task_by_title(title).await?;
        Ok(self.repository.delete(&resolved).await?)
    }

    /// Returns every task that has not been completed, in store iteration
    /// order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskTrackingError::Repository`] when the listing read
    /// fails.
    pub async fn pending_tasks(&self) -> TaskTrackingResult<Vec<Task>> {
        let tasks = self.all_tasks().await?;
        Ok(tasks.into_iter().filter(|t| !t.is_completed()).collect())
    }

    /// Returns every completed task, in store iteration order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskTrackingError::Repository`] when the listing read
    /// fails.
    pub async fn completed_tasks(&self) -> TaskTrackingResult<Vec<Task>> {
        let tasks = self.all_tasks().await?;
        Ok(tasks.into_iter().filter(Task::is_completed).collect())
    }

    /// Returns every pending task due on the current calendar date,
    /// evaluated at call time in the server's local time zone. Tasks
    /// without a due date are excluded.
    ///
    /// # Errors
    ///
    /// Returns [`TaskTrackingError::Repository`] when the listing read
    /// fails.
    pub async fn due_today(&self) -> TaskTrackingResult<Vec<Task>> {
        let today = self.clock.local().date_naive();
        let tasks = self.all_tasks().await?;
        Ok(tasks
            .into_iter()
            .filter(|t| !t.is_completed() && t.is_due_on(today))
            .collect())
    }
}
