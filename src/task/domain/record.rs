//! Task aggregate root.

use super::{TaskDomainError, TaskId, TaskTitle};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Task aggregate root.
///
/// A task carries its store-assigned identifier only after persistence;
/// [`Task::id`] is `None` for records that have not yet been saved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: Option<TaskId>,
    title: TaskTitle,
    description: String,
    completed: bool,
    due_date: Option<NaiveDate>,
}

/// Parameter object for reconstructing a persisted task record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Store-assigned task identifier.
    pub id: TaskId,
    /// Persisted task title.
    pub title: TaskTitle,
    /// Persisted task description.
    pub description: String,
    /// Persisted completion flag.
    pub completed: bool,
    /// Persisted due date, when one was set.
    pub due_date: Option<NaiveDate>,
}

impl Task {
    /// Creates a new, unpersisted pending task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyDescription`] when the description is
    /// empty after trimming.
    pub fn new(
        title: TaskTitle,
        description: impl Into<String>,
        due_date: Option<NaiveDate>,
    ) -> Result<Self, TaskDomainError> {
        Ok(Self {
            id: None,
            title,
            description: validated_description(description)?,
            completed: false,
            due_date,
        })
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: Some(data.id),
            title: data.title,
            description: data.description,
            completed: data.completed,
            due_date: data.due_date,
        }
    }

    /// Returns the store-assigned identifier, when the task is persisted.
    #[must_use]
    pub const fn id(&self) -> Option<TaskId> {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns `true` when the task has been completed.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    /// Returns the due date, when one was set.
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    /// Returns `true` when the task is due on the given calendar date.
    ///
    /// Tasks without a due date are never due.
    #[must_use]
    pub fn is_due_on(&self, date: NaiveDate) -> bool {
        self.due_date == Some(date)
    }

    /// Replaces the description, completion flag, and due date, preserving
    /// the identifier and title.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyDescription`] when the replacement
    /// description is empty after trimming.
    pub fn revise(
        &mut self,
        description: impl Into<String>,
        completed: bool,
        due_date: Option<NaiveDate>,
    ) -> Result<(), TaskDomainError> {
        self.description = validated_description(description)?;
        self.completed = completed;
        self.due_date = due_date;
        Ok(())
    }

    /// Marks the task as completed.
    pub const fn mark_completed(&mut self) {
        self.completed = true;
    }
}

fn validated_description(value: impl Into<String>) -> Result<String, TaskDomainError> {
    let raw = value.into();
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(TaskDomainError::EmptyDescription);
    }
    Ok(trimmed.to_owned())
}
