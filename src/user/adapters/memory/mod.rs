//! In-memory adapters for the user module.

mod users;

pub use users::InMemoryUserRepository;
