//! Diesel row models for task persistence.

use super::schema::tasks;
use chrono::NaiveDate;
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Store-assigned task identifier.
    pub id: i64,
    /// Unique task title.
    pub title: String,
    /// Free-form task description.
    pub description: String,
    /// Completion flag.
    pub completed: bool,
    /// Optional due date.
    pub due_date: Option<NaiveDate>,
}

/// Insert model for task records. The identifier is assigned by the
/// `BIGSERIAL` column.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Unique task title.
    pub title: String,
    /// Free-form task description.
    pub description: String,
    /// Completion flag.
    pub completed: bool,
    /// Optional due date.
    pub due_date: Option<NaiveDate>,
}
