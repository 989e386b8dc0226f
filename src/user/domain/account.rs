//! User account aggregate root.

use super::{EmailAddress, Roles, UserDomainError, UserId, Username};
use serde::{Deserialize, Serialize};

/// User account aggregate root.
///
/// The password field is opaque to the domain: after registration it holds
/// the hasher's output, but nothing in this type prevents a caller from
/// constructing an account around a plaintext value. The account service
/// documents where that matters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: Option<UserId>,
    username: Username,
    password: String,
    email: EmailAddress,
    roles: Roles,
}

/// Parameter object for reconstructing a persisted user account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedUserData {
    /// Store-assigned account identifier.
    pub id: UserId,
    /// Persisted username.
    pub username: Username,
    /// Persisted credential (the hasher's output).
    pub password: String,
    /// Persisted email address.
    pub email: EmailAddress,
    /// Persisted role label set.
    pub roles: Roles,
}

impl User {
    /// Creates a new, unpersisted account.
    ///
    /// # Errors
    ///
    /// Returns [`UserDomainError::EmptyPassword`] when the password is empty
    /// after trimming.
    pub fn new(
        username: Username,
        password: impl Into<String>,
        email: EmailAddress,
        roles: Roles,
    ) -> Result<Self, UserDomainError> {
        let password_value = password.into();
        if password_value.trim().is_empty() {
            return Err(UserDomainError::EmptyPassword);
        }

        Ok(Self {
            id: None,
            username,
            password: password_value,
            email,
            roles,
        })
    }

    /// Reconstructs an account from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedUserData) -> Self {
        Self {
            id: Some(data.id),
            username: data.username,
            password: data.password,
            email: data.email,
            roles: data.roles,
        }
    }

    /// Returns the store-assigned identifier, when the account is persisted.
    #[must_use]
    pub const fn id(&self) -> Option<UserId> {
        self.id
    }

    /// Returns the username.
    #[must_use]
    pub const fn username(&self) -> &Username {
        &self.username
    }

    /// Returns the stored credential.
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Returns the email address.
    #[must_use]
    pub const fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Returns the role label set.
    #[must_use]
    pub const fn roles(&self) -> &Roles {
        &self.roles
    }

    /// Replaces the stored credential with an encoded hash.
    pub(crate) fn set_password(&mut self, encoded: String) {
        self.password = encoded;
    }
}
