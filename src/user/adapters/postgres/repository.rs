//! `PostgreSQL` repository implementation for user account persistence.

use super::{
    models::{NewUserRow, UserRow},
    schema::users,
};
use crate::user::{
    domain::{EmailAddress, PersistedUserData, Roles, User, UserId, Username},
    ports::{UserRepository, UserRepositoryError, UserRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorInformation, DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by user adapters.
pub type UserPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed user repository.
#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pool: UserPgPool,
}

impl PostgresUserRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: UserPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> UserRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> UserRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(UserRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(UserRepositoryError::persistence)?
    }
}

fn row_to_user(row: UserRow) -> UserRepositoryResult<User> {
    let username =
        Username::new(row.username).map_err(UserRepositoryError::invalid_persisted_data)?;
    let email = EmailAddress::new(row.email).map_err(UserRepositoryError::invalid_persisted_data)?;
    let roles = Roles::new(row.roles).map_err(UserRepositoryError::invalid_persisted_data)?;
    Ok(User::from_persisted(PersistedUserData {
        id: UserId::from_raw(row.id),
        username,
        password: row.password,
        email,
        roles,
    }))
}

fn is_email_unique_violation(info: &(dyn DatabaseErrorInformation + Send + Sync)) -> bool {
    info.constraint_name()
        .is_some_and(|name| name.contains("email"))
}

fn map_write_error(err: DieselError, user: &User) -> UserRepositoryError {
    match err {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, ref info)
            if is_email_unique_violation(info.as_ref()) =>
        {
            UserRepositoryError::DuplicateEmail(user.email().clone())
        }
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            UserRepositoryError::DuplicateUsername(user.username().clone())
        }
        _ => UserRepositoryError::persistence(err),
    }
}

fn insert_user(connection: &mut PgConnection, user: &User) -> UserRepositoryResult<User> {
    let new_row = NewUserRow {
        username: user.username().as_str().to_owned(),
        password: user.password().to_owned(),
        email: user.email().as_str().to_owned(),
        roles: user.roles().as_str().to_owned(),
    };

    let row = diesel::insert_into(users::table)
        .values(&new_row)
        .returning(UserRow::as_returning())
        .get_result::<UserRow>(connection)
        .map_err(|err| map_write_error(err, user))?;
    row_to_user(row)
}

fn update_user(
    connection: &mut PgConnection,
    user: &User,
    id: UserId,
) -> UserRepositoryResult<User> {
    let row = diesel::update(users::table.filter(users::id.eq(id.into_inner())))
        .set((
            users::username.eq(user.username().as_str()),
            users::password.eq(user.password()),
            users::email.eq(user.email().as_str()),
            users::roles.eq(user.roles().as_str()),
        ))
        .returning(UserRow::as_returning())
        .get_result::<UserRow>(connection)
        .optional()
        .map_err(|err| map_write_error(err, user))?
        .ok_or(UserRepositoryError::NotFound(id))?;
    row_to_user(row)
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn save(&self, user: &User) -> UserRepositoryResult<User> {
        let record = user.clone();
        self.run_blocking(move |connection| match record.id() {
            None => insert_user(connection, &record),
            Some(id) => update_user(connection, &record, id),
        })
        .await
    }

    async fn delete(&self, user: &User) -> UserRepositoryResult<()> {
        let Some(id) = user.id() else {
            return Ok(());
        };

        self.run_blocking(move |connection| {
            diesel::delete(users::table.filter(users::id.eq(id.into_inner())))
                .execute(connection)
                .map_err(UserRepositoryError::persistence)?;
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: UserId) -> UserRepositoryResult<Option<User>> {
        self.run_blocking(move |connection| {
            let row = users::table
                .filter(users::id.eq(id.into_inner()))
                .select(UserRow::as_select())
                .first::<UserRow>(connection)
                .optional()
                .map_err(UserRepositoryError::persistence)?;
            row.map(row_to_user).transpose()
        })
        .await
    }

    async fn find_by_username(&self, username: &Username) -> UserRepositoryResult<Option<User>> {
        let username_value = username.as_str().to_owned();
        self.run_blocking(move |connection| {
            let row = users::table
                .filter(users::username.eq(&username_value))
                .select(UserRow::as_select())
                .first::<UserRow>(connection)
                .optional()
                .map_err(UserRepositoryError::persistence)?;
            row.map(row_to_user).transpose()
        })
        .await
    }

    async fn find_by_email(&self, email: &EmailAddress) -> UserRepositoryResult<Option<User>> {
        let email_value = email.as_str().to_owned();
        self.run_blocking(move |connection| {
            let row = users::table
                .filter(users::email.eq(&email_value))
                .select(UserRow::as_select())
                .first::<UserRow>(connection)
                .optional()
                .map_err(UserRepositoryError::persistence)?;
            row.map(row_to_user).transpose()
        })
        .await
    }

    async fn find_all(&self) -> UserRepositoryResult<Vec<User>> {
        self.run_blocking(|connection| {
            let rows = users::table
                .order(users::id.asc())
                .select(UserRow::as_select())
                .load::<UserRow>(connection)
                .map_err(UserRepositoryError::persistence)?;
            rows.into_iter().map(row_to_user).collect()
        })
        .await
    }
}
