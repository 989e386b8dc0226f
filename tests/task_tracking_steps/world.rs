//! Shared world state for task tracking BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use todorail::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::Task,
    services::{CreateTaskRequest, TaskTrackingError, TaskTrackingService},
};

/// Service type used by the BDD world.
pub type TestTrackingService = TaskTrackingService<InMemoryTaskRepository, DefaultClock>;

/// Pending task specification before addition.
pub struct PendingTask {
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
}

/// Scenario world for task tracking behaviour tests.
pub struct TaskTrackingWorld {
    /// The tracking service under test.
    pub service: TestTrackingService,
    /// Tasks queued for addition.
    pub pending_tasks: Vec<PendingTask>,
    /// Last successfully added task.
    pub last_added: Option<Task>,
    /// Result of the last addition attempt.
    pub last_add_result: Option<Result<Task, TaskTrackingError>>,
    /// Result of the last title lookup.
    pub last_lookup_result: Option<Result<Task, TaskTrackingError>>,
}

impl TaskTrackingWorld {
    /// Creates a world with empty pending scenario state.
    #[must_use]
    pub fn new() -> Self {
        let service = TaskTrackingService::new(
            Arc::new(InMemoryTaskRepository::new()),
            Arc::new(DefaultClock),
        );
        Self {
            service,
            pending_tasks: Vec::new(),
            last_added: None,
            last_add_result: None,
            last_lookup_result: None,
        }
    }
}

impl Default for TaskTrackingWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskTrackingWorld {
    TaskTrackingWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

/// Builds a [`CreateTaskRequest`] from a title and description.
pub fn build_request(title: &str, description: &str) -> CreateTaskRequest {
    CreateTaskRequest::new(title, description)
}
