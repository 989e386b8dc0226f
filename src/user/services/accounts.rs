//! Service layer for account registration, lookup, update, and deletion.
//!
//! Provides [`UserAccountService`] which enforces username and email
//! uniqueness at registration, encodes passwords through the hashing port
//! before persistence, and exposes the credential lookup consumed by the
//! authentication middleware.

use crate::error::ErrorKind;
use crate::user::{
    domain::{EmailAddress, Roles, User, UserDomainError, UserId, Username},
    ports::{PasswordHasher, UserRepository, UserRepositoryError},
};
use std::sync::Arc;
use thiserror::Error;

/// Default role label set assigned at registration.
const DEFAULT_ROLES: &str = "USER";

/// Request payload for registering a new account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterUserRequest {
    username: String,
    password: String,
    email: String,
    roles: String,
}

impl RegisterUserRequest {
    /// Creates a request with the required registration fields and the
    /// default `USER` role.
    #[must_use]
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            email: email.into(),
            roles: DEFAULT_ROLES.to_owned(),
        }
    }

    /// Replaces the default role label set.
    #[must_use]
    pub fn with_roles(mut self, roles: impl Into<String>) -> Self {
        self.roles = roles.into();
        self
    }
}

/// Service-level errors for account operations.
#[derive(Debug, Error)]
pub enum UserAccountError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] UserDomainError),

    /// An account with the requested username already exists.
    #[error("username already exists: {0}")]
    UsernameTaken(Username),

    /// An account with the requested email address already exists.
    #[error("email already exists: {0}")]
    EmailTaken(EmailAddress),

    /// No account has the requested username.
    #[error("user not found with username: {0}")]
    UsernameNotFound(String),

    /// No account has the requested email address.
    #[error("user not found with email: {0}")]
    EmailNotFound(String),

    /// No account has the requested identifier.
    #[error("user not found with id: {0}")]
    IdNotFound(UserId),

    /// The store holds no accounts at all.
    #[error("no users found")]
    NoUsersFound,

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] UserRepositoryError),
}

impl UserAccountError {
    /// Classifies the failure for presentation-layer mapping.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::UsernameTaken(_)
            | Self::EmailTaken(_)
            | Self::Repository(
                UserRepositoryError::DuplicateUsername(_) | UserRepositoryError::DuplicateEmail(_),
            ) => ErrorKind::AlreadyExists,
            Self::UsernameNotFound(_)
            | Self::EmailNotFound(_)
            | Self::IdNotFound(_)
            | Self::NoUsersFound
            | Self::Repository(UserRepositoryError::NotFound(_)) => ErrorKind::NotFound,
            Self::Domain(_)
            | Self::Repository(
                UserRepositoryError::InvalidPersistedData(_) | UserRepositoryError::Persistence(_),
            ) => ErrorKind::Other,
        }
    }
}

/// Result type for account service operations.
pub type UserAccountResult<T> = Result<T, UserAccountError>;

/// Account registration and lookup orchestration service.
#[derive(Clone)]
pub struct UserAccountService<R, H>
where
    R: UserRepository,
    H: PasswordHasher,
{
    repository: Arc<R>,
    hasher: Arc<H>,
}

impl<R, H> UserAccountService<R, H>
where
    R: UserRepository,
    H: PasswordHasher,
{
    /// Creates a new account service.
    #[must_use]
    pub const fn new(repository: Arc<R>, hasher: Arc<H>) -> Self {
        Self { repository, hasher }
    }

    /// Registers a new account.
    ///
    /// The username uniqueness check runs first; an email collision is only
    /// reported when the username check passed. On success the plaintext
    /// password is replaced with the hasher's output before persistence,
    /// and the stored account (hashed password included) is returned.
    ///
    /// # Errors
    ///
    /// Returns [`UserAccountError::UsernameTaken`] or
    /// [`UserAccountError::EmailTaken`] on a uniqueness collision,
    /// [`UserAccountError::Domain`] when the payload fails validation, or
    /// [`UserAccountError::Repository`] when persistence fails.
    pub async fn register_user(&self, request: RegisterUserRequest) -> UserAccountResult<User> {
        let RegisterUserRequest {
            username,
            password,
            email,
            roles,
        } = request;

        let account_name = Username::new(username)?;
        let address = EmailAddress::new(email)?;

        if self
            .repository
            .find_by_username(&account_name)
            .await?
            .is_some()
        {
            return Err(UserAccountError::UsernameTaken(account_name));
        }
        if self.repository.find_by_email(&address).await?.is_some() {
            return Err(UserAccountError::EmailTaken(address));
        }

        let mut account = User::new(account_name, password, address, Roles::new(roles)?)?;
        let encoded = self.hasher.encode(account.password());
        account.set_password(encoded);

        Ok(self.repository.save(&account).await?)
    }

    /// Retrieves an account by exact username match.
    ///
    /// This is also the credential lookup used by the authentication
    /// middleware; role labels are available through
    /// [`Roles::labels`](crate::user::domain::Roles::labels).
    ///
    /// # Errors
    ///
    /// Returns [`UserAccountError::UsernameNotFound`] when no account has
    /// the given username.
    pub async fn user_by_username(&self, username: &str) -> UserAccountResult<User> {
        let account_name = Username::new(username)?;
        self.repository
            .find_by_username(&account_name)
            .await?
            .ok_or_else(|| UserAccountError::UsernameNotFound(username.to_owned()))
    }

    /// Retrieves an account by exact email match. Syntax is validated by
    /// the [`EmailAddress`] constructor; no deliverability check is made.
    ///
    /// # Errors
    ///
    /// Returns [`UserAccountError::EmailNotFound`] when no account has the
    /// given address.
    pub async fn user_by_email(&self, email: &str) -> UserAccountResult<User> {
        let address = EmailAddress::new(email)?;
        self.repository
            .find_by_email(&address)
            .await?
            .ok_or_else(|| UserAccountError::EmailNotFound(email.to_owned()))
    }

    /// Retrieves an account by store-assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`UserAccountError::IdNotFound`] when no account has the
    /// given identifier.
    pub async fn user_by_id(&self, id: UserId) -> UserAccountResult<User> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UserAccountError::IdNotFound(id))
    }

    /// Updates an account, resolving existence by the input's username.
    ///
    /// Caveat, preserved from the original product behaviour: the *input*
    /// record is persisted verbatim after the existence check. A plaintext
    /// password supplied in the payload is stored un-hashed, and the row
    /// acted on is the one matching the input's identifier, which the
    /// existence check does not validate. Flagged to product rather than
    /// silently corrected.
    ///
    /// # Errors
    ///
    /// Returns [`UserAccountError::UsernameNotFound`] when no account has
    /// the input's username, or [`UserAccountError::Repository`] when
    /// persistence fails.
    pub async fn update_user(&self, user: User) -> UserAccountResult<User> {
        if self
            .repository
            .find_by_username(user.username())
            .await?
            .is_none()
        {
            return Err(UserAccountError::UsernameNotFound(
                user.username().as_str().to_owned(),
            ));
        }

        Ok(self.repository.save(&user).await?)
    }

    /// Deletes an account, resolving existence by the input's username.
    ///
    /// Caveat, preserved from the original product behaviour: deletion is
    /// keyed by the *input* record's identifier, not the record resolved by
    /// the existence check. An input carrying a mismatched identifier
    /// removes the wrong row.
    ///
    /// # Errors
    ///
    /// Returns [`UserAccountError::UsernameNotFound`] when no account has
    /// the input's username, or [`UserAccountError::Repository`] when the
    /// delete fails.
    pub async fn delete_user(&self, user: &User) -> UserAccountResult<()> {
        if self
            .repository
            .find_by_username(user.username())
            .await?
            .is_none()
        {
            return Err(UserAccountError::UsernameNotFound(
                user.username().as_str().to_owned(),
            ));
        }

        Ok(self.repository.delete(user).await?)
    }

    /// Returns every account.
    ///
    /// Unlike the task listing, an empty store is reported as
    /// [`UserAccountError::NoUsersFound`] rather than an empty vector.
    /// Preserved, documented behaviour.
    ///
    /// # Errors
    ///
    /// Returns [`UserAccountError::NoUsersFound`] when the store holds no
    /// accounts, or [`UserAccountError::Repository`] when the listing read
    /// fails.
    pub async fn all_users(&self) -> UserAccountResult<Vec<User>> {
        let users = self.repository.find_all().await?;
        if users.is_empty() {
            return Err(UserAccountError::NoUsersFound);
        }
        Ok(users)
    }
}
