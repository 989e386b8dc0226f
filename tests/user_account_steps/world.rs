//! Shared world state for user account BDD scenarios.

use std::sync::Arc;

use rstest::fixture;
use todorail::user::{
    adapters::{hasher::SaltedSha256Hasher, memory::InMemoryUserRepository},
    domain::User,
    services::{RegisterUserRequest, UserAccountError, UserAccountService},
};

/// Service type used by the BDD world.
pub type TestAccountService = UserAccountService<InMemoryUserRepository, SaltedSha256Hasher>;

/// Plaintext credential submitted in every scenario registration.
pub const SCENARIO_PASSWORD: &str = "s3cret";

/// Pending account specification before registration.
pub struct PendingAccount {
    /// Account username.
    pub username: String,
    /// Account email address.
    pub email: String,
}

/// Scenario world for user account behaviour tests.
pub struct UserAccountWorld {
    /// The account service under test.
    pub service: TestAccountService,
    /// Accounts queued for registration.
    pub pending_accounts: Vec<PendingAccount>,
    /// Last successfully registered account.
    pub last_registered: Option<User>,
    /// Result of the last registration attempt.
    pub last_register_result: Option<Result<User, UserAccountError>>,
    /// Result of the last listing call.
    pub last_list_result: Option<Result<Vec<User>, UserAccountError>>,
}

impl UserAccountWorld {
    /// Creates a world with empty pending scenario state.
    #[must_use]
    pub fn new() -> Self {
        let service = UserAccountService::new(
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(SaltedSha256Hasher::new()),
        );
        Self {
            service,
            pending_accounts: Vec::new(),
            last_registered: None,
            last_register_result: None,
            last_list_result: None,
        }
    }
}

impl Default for UserAccountWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> UserAccountWorld {
    UserAccountWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

/// Builds a [`RegisterUserRequest`] from a username and email.
pub fn build_request(username: &str, email: &str) -> RegisterUserRequest {
    RegisterUserRequest::new(username, SCENARIO_PASSWORD, email)
}
