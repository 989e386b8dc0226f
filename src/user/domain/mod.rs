//! Domain model for user accounts.
//!
//! The user domain models account identity: a unique username, a unique
//! email address, an opaque stored credential, and a comma-joined role
//! label set. All infrastructure concerns are kept outside the domain
//! boundary.

mod account;
mod email;
mod error;
mod ids;
mod roles;
mod username;

pub use account::{PersistedUserData, User};
pub use email::EmailAddress;
pub use error::UserDomainError;
pub use ids::UserId;
pub use roles::Roles;
pub use username::Username;
