//! Error types for user domain validation.

use thiserror::Error;

/// Errors returned while constructing user domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserDomainError {
    /// The username is empty after trimming.
    #[error("username must not be empty")]
    EmptyUsername,

    /// The username exceeds the 100-character storage limit.
    #[error("username exceeds 100 character limit: {0}")]
    UsernameTooLong(String),

    /// The password is empty after trimming.
    #[error("password must not be empty")]
    EmptyPassword,

    /// The email address is empty after trimming.
    #[error("email address must not be empty")]
    EmptyEmail,

    /// The email address is not syntactically valid.
    #[error("invalid email address: {0}")]
    InvalidEmail(String),

    /// The role label set is empty after trimming.
    #[error("roles must not be empty")]
    EmptyRoles,
}
