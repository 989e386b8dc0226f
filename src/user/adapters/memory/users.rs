//! In-memory user repository for tests and store-free hosting.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::user::{
    domain::{EmailAddress, PersistedUserData, User, UserId, Username},
    ports::{UserRepository, UserRepositoryError, UserRepositoryResult},
};

/// Thread-safe in-memory user repository.
///
/// Assigns sequential identifiers on first save and enforces the unique
/// username and email constraints, matching the backstop behaviour
/// required of the SQL store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    state: Arc<RwLock<InMemoryUserState>>,
}

#[derive(Debug, Default)]
struct InMemoryUserState {
    users: HashMap<UserId, User>,
    username_index: HashMap<Username, UserId>,
    email_index: HashMap<EmailAddress, UserId>,
    next_id: i64,
}

impl InMemoryUserRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl std::fmt::Display) -> UserRepositoryError {
    UserRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

fn persisted_copy(user: &User, id: UserId) -> User {
    User::from_persisted(PersistedUserData {
        id,
        username: user.username().clone(),
        password: user.password().to_owned(),
        email: user.email().clone(),
        roles: user.roles().clone(),
    })
}

fn check_unique_for(
    state: &InMemoryUserState,
    user: &User,
    id: Option<UserId>,
) -> UserRepositoryResult<()> {
    if let Some(&owner) = state.username_index.get(user.username())
        && Some(owner) != id
    {
        return Err(UserRepositoryError::DuplicateUsername(
            user.username().clone(),
        ));
    }
    if let Some(&owner) = state.email_index.get(user.email())
        && Some(owner) != id
    {
        return Err(UserRepositoryError::DuplicateEmail(user.email().clone()));
    }
    Ok(())
}

fn reindex(state: &mut InMemoryUserState, stored: &User, id: UserId) {
    state.username_index.insert(stored.username().clone(), id);
    state.email_index.insert(stored.email().clone(), id);
    state.users.insert(id, stored.clone());
}

fn insert_new(state: &mut InMemoryUserState, user: &User) -> UserRepositoryResult<User> {
    check_unique_for(state, user, None)?;

    state.next_id += 1;
    let id = UserId::from_raw(state.next_id);
    let stored = persisted_copy(user, id);
    reindex(state, &stored, id);
    Ok(stored)
}

fn update_existing(
    state: &mut InMemoryUserState,
    user: &User,
    id: UserId,
) -> UserRepositoryResult<User> {
    let previous = state
        .users
        .get(&id)
        .ok_or(UserRepositoryError::NotFound(id))?
        .clone();
    check_unique_for(state, user, Some(id))?;

    state.username_index.remove(previous.username());
    state.email_index.remove(previous.email());

    let stored = persisted_copy(user, id);
    reindex(state, &stored, id);
    Ok(stored)
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn save(&self, user: &User) -> UserRepositoryResult<User> {
        let mut state = self.state.write().map_err(lock_error)?;
        match user.id() {
            None => insert_new(&mut state, user),
            Some(id) => update_existing(&mut state, user, id),
        }
    }

    async fn delete(&self, user: &User) -> UserRepositoryResult<()> {
        let Some(id) = user.id() else {
            // Transient records have no row to remove, matching the SQL
            // store's delete-by-identifier semantics.
            return Ok(());
        };

        let mut state = self.state.write().map_err(lock_error)?;
        if let Some(removed) = state.users.remove(&id) {
            state.username_index.remove(removed.username());
            state.email_index.remove(removed.email());
        }
        Ok(())
    }

    async fn find_by_id(&self, id: UserId) -> UserRepositoryResult<Option<User>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.users.get(&id).cloned())
    }

    async fn find_by_username(&self, username: &Username) -> UserRepositoryResult<Option<User>> {
        let state = self.state.read().map_err(lock_error)?;
        let user = state
            .username_index
            .get(username)
            .and_then(|id| state.users.get(id))
            .cloned();
        Ok(user)
    }

    async fn find_by_email(&self, email: &EmailAddress) -> UserRepositoryResult<Option<User>> {
        let state = self.state.read().map_err(lock_error)?;
        let user = state
            .email_index
            .get(email)
            .and_then(|id| state.users.get(id))
            .cloned();
        Ok(user)
    }

    async fn find_all(&self) -> UserRepositoryResult<Vec<User>> {
        let state = self.state.read().map_err(lock_error)?;
        let mut users: Vec<User> = state.users.values().cloned().collect();
        users.sort_by_key(User::id);
        Ok(users)
    }
}
