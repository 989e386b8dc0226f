//! Diesel row models for user account persistence.

use super::schema::users;
use diesel::prelude::*;

/// Query result row for user account records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UserRow {
    /// Store-assigned account identifier.
    pub id: i64,
    /// Unique username.
    pub username: String,
    /// Stored credential.
    pub password: String,
    /// Unique email address.
    pub email: String,
    /// Comma-joined role label set.
    pub roles: String,
}

/// Insert model for user account records. The identifier is assigned by
/// the `BIGSERIAL` column.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub struct NewUserRow {
    /// Unique username.
    pub username: String,
    /// Stored credential.
    pub password: String,
    /// Unique email address.
    pub email: String,
    /// Comma-joined role label set.
    pub roles: String,
}
