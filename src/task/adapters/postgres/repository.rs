//! `PostgreSQL` repository implementation for task persistence.

use super::{
    models::{NewTaskRow, TaskRow},
    schema::tasks,
};
use crate::task::{
    domain::{PersistedTaskData, Task, TaskId, TaskTitle},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by task adapters.
pub type TaskPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed task repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: TaskPgPool,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskRepositoryError::persistence)?
    }
}

fn row_to_task(row: TaskRow) -> TaskRepositoryResult<Task> {
    let title = TaskTitle::new(row.title).map_err(TaskRepositoryError::invalid_persisted_data)?;
    Ok(Task::from_persisted(PersistedTaskData {
        id: TaskId::from_raw(row.id),
        title,
        description: row.description,
        completed: row.completed,
        due_date: row.due_date,
    }))
}

fn map_insert_error(err: DieselError, title: &TaskTitle) -> TaskRepositoryError {
    match err {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            TaskRepositoryError::DuplicateTitle(title.clone())
        }
        _ => TaskRepositoryError::persistence(err),
    }
}

fn insert_task(connection: &mut PgConnection, task: &Task) -> TaskRepositoryResult<Task> {
    let new_row = NewTaskRow {
        title: task.title().as_str().to_owned(),
        description: task.description().to_owned(),
        completed: task.is_completed(),
        due_date: task.due_date(),
    };

    let row = diesel::insert_into(tasks::table)
        .values(&new_row)
        .returning(TaskRow::as_returning())
        .get_result::<TaskRow>(connection)
        .map_err(|err| map_insert_error(err, task.title()))?;
    row_to_task(row)
}

fn update_task(
    connection: &mut PgConnection,
    task: &Task,
    id: TaskId,
) -> TaskRepositoryResult<Task> {
    let row = diesel::update(tasks::table.filter(tasks::id.eq(id.into_inner())))
        .set((
            tasks::title.eq(task.title().as_str()),
            tasks::description.eq(task.description()),
            tasks::completed.eq(task.is_completed()),
            tasks::due_date.eq(task.due_date()),
        ))
        .returning(TaskRow::as_returning())
        .get_result::<TaskRow>(connection)
        .optional()
        .map_err(|err| map_insert_error(err, task.title()))?
        .ok_or(TaskRepositoryError::NotFound(id))?;
    row_to_task(row)
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn save(&self, task: &Task) -> TaskRepositoryResult<Task> {
        let record = task.clone();
        self.run_blocking(move |connection| match record.id() {
            None => insert_task(connection, &record),
            Some(id) => update_task(connection, &record, id),
        })
        .await
    }

    async fn delete(&self, task: &Task) -> TaskRepositoryResult<()> {
        let Some(id) = task.id() else {
            return Ok(());
        };

        self.run_blocking(move |connection| {
            diesel::delete(tasks::table.filter(tasks::id.eq(id.into_inner())))
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = tasks::table
                .filter(tasks::id.eq(id.into_inner()))
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn find_by_title(&self, title: &TaskTitle) -> TaskRepositoryResult<Option<Task>> {
        let title_value = title.as_str().to_owned();
        self.run_blocking(move |connection| {
            let row = tasks::table
                .filter(tasks::title.eq(&title_value))
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn find_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        self.run_blocking(|connection| {
            let rows = tasks::table
                .order(tasks::id.asc())
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }
}
