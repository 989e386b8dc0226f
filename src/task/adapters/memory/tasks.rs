//! In-memory task repository for tests and store-free hosting.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{PersistedTaskData, Task, TaskId, TaskTitle},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
///
/// Assigns sequential identifiers on first save and enforces the unique
/// title constraint, matching the backstop behaviour required of the SQL
/// store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: HashMap<TaskId, Task>,
    title_index: HashMap<TaskTitle, TaskId>,
    next_id: i64,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl std::fmt::Display) -> TaskRepositoryError {
    TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

fn persisted_copy(task: &Task, id: TaskId) -> Task {
    Task::from_persisted(PersistedTaskData {
        id,
        title: task.title().clone(),
        description: task.description().to_owned(),
        completed: task.is_completed(),
        due_date: task.due_date(),
    })
}

fn insert_new(state: &mut InMemoryTaskState, task: &Task) -> TaskRepositoryResult<Task> {
    if state.title_index.contains_key(task.title()) {
        return Err(TaskRepositoryError::DuplicateTitle(task.title().clone()));
    }

    state.next_id += 1;
    let id = TaskId::from_raw(state.next_id);
    let stored = persisted_copy(task, id);
    state.title_index.insert(stored.title().clone(), id);
    state.tasks.insert(id, stored.clone());
    Ok(stored)
}

fn update_existing(
    state: &mut InMemoryTaskState,
    task: &Task,
    id: TaskId,
) -> TaskRepositoryResult<Task> {
    let old_title = state
        .tasks
        .get(&id)
        .ok_or(TaskRepositoryError::NotFound(id))?
        .title()
        .clone();

    if *task.title() != old_title {
        if let Some(&indexed_id) = state.title_index.get(task.title())
            && indexed_id != id
        {
            return Err(TaskRepositoryError::DuplicateTitle(task.title().clone()));
        }
        state.title_index.remove(&old_title);
        state.title_index.insert(task.title().clone(), id);
    }

    let stored = persisted_copy(task, id);
    state.tasks.insert(id, stored.clone());
    Ok(stored)
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn save(&self, task: &Task) -> TaskRepositoryResult<Task> {
        let mut state = self.state.write().map_err(lock_error)?;
        match task.id() {
            None => insert_new(&mut state, task),
            Some(id) => update_existing(&mut state, task, id),
        }
    }

    async fn delete(&self, task: &Task) -> TaskRepositoryResult<()> {
        let Some(id) = task.id() else {
            // Transient records have no row to remove, matching the SQL
            // store's delete-by-identifier semantics.
            return Ok(());
        };

        let mut state = self.state.write().map_err(lock_error)?;
        if let Some(removed) = state.tasks.remove(&id) {
            state.title_index.remove(removed.title());
        }
        Ok(())
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.tasks.get(&id).cloned())
    }

    async fn find_by_title(&self, title: &TaskTitle) -> TaskRepositoryResult<Option<Task>> {
        let state = self.state.read().map_err(lock_error)?;
        let task = state
            .title_index
            .get(title)
            .and_then(|id| state.tasks.get(id))
            .cloned();
        Ok(task)
    }

    async fn find_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(lock_error)?;
        let mut tasks: Vec<Task> = state.tasks.values().cloned().collect();
        tasks.sort_by_key(Task::id);
        Ok(tasks)
    }
}
