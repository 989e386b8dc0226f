//! Repository port for user account persistence and lookup.

use crate::user::domain::{EmailAddress, User, UserId, Username};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for user repository operations.
pub type UserRepositoryResult<T> = Result<T, UserRepositoryError>;

/// User account persistence contract.
///
/// Implementations must enforce the unique constraints on username and
/// email at the storage layer; the service-level uniqueness checks and the
/// save that follows them are not atomic, and the storage constraints are
/// the only backstop against concurrent duplicate registrations.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persists the account, assigning an identifier when the record has
    /// none and updating the existing row otherwise. Returns the stored
    /// record.
    ///
    /// # Errors
    ///
    /// Returns [`UserRepositoryError::DuplicateUsername`] or
    /// [`UserRepositoryError::DuplicateEmail`] when a unique constraint
    /// rejects the write, or [`UserRepositoryError::NotFound`] when the
    /// record carries an identifier that no longer exists.
    async fn save(&self, user: &User) -> UserRepositoryResult<User>;

    /// Removes the row matching the record's identifier. Records without an
    /// identifier are ignored.
    async fn delete(&self, user: &User) -> UserRepositoryResult<()>;

    /// Finds an account by store-assigned identifier.
    ///
    /// Returns `None` when the account does not exist.
    async fn find_by_id(&self, id: UserId) -> UserRepositoryResult<Option<User>>;

    /// Finds an account by exact username match.
    ///
    /// Returns `None` when no account has the given username.
    async fn find_by_username(&self, username: &Username) -> UserRepositoryResult<Option<User>>;

    /// Finds an account by exact email match.
    ///
    /// Returns `None` when no account has the given address.
    async fn find_by_email(&self, email: &EmailAddress) -> UserRepositoryResult<Option<User>>;

    /// Returns every stored account, in store iteration order.
    async fn find_all(&self) -> UserRepositoryResult<Vec<User>>;
}

/// Errors returned by user repository implementations.
#[derive(Debug, Clone, Error)]
pub enum UserRepositoryError {
    /// An account with the same username already exists.
    #[error("duplicate username: {0}")]
    DuplicateUsername(Username),

    /// An account with the same email address already exists.
    #[error("duplicate email address: {0}")]
    DuplicateEmail(EmailAddress),

    /// The account was not found.
    #[error("user not found: {0}")]
    NotFound(UserId),

    /// Persisted data could not be reconstructed into domain types.
    #[error("invalid persisted data: {0}")]
    InvalidPersistedData(Arc<dyn std::error::Error + Send + Sync>),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl UserRepositoryError {
    /// Wraps a data-quality or deserialization error from persisted rows.
    pub fn invalid_persisted_data(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidPersistedData(Arc::new(err))
    }

    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
