//! Orchestration services for user accounts.

pub mod accounts;

pub use accounts::{
    RegisterUserRequest, UserAccountError, UserAccountResult, UserAccountService,
};
