//! Behaviour tests for task creation, lookup, deletion, and listings.

mod task_tracking_steps;

use rstest_bdd_macros::scenario;
use task_tracking_steps::world::{TaskTrackingWorld, world};

#[scenario(
    path = "tests/features/task_tracking.feature",
    name = "Add a task and retrieve it by title"
)]
#[tokio::test(flavor = "multi_thread")]
async fn add_and_retrieve_by_title(world: TaskTrackingWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/task_tracking.feature",
    name = "Reject a duplicate title"
)]
#[tokio::test(flavor = "multi_thread")]
async fn reject_duplicate_title(world: TaskTrackingWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/task_tracking.feature",
    name = "Delete a task and it can no longer be found"
)]
#[tokio::test(flavor = "multi_thread")]
async fn delete_then_lookup_fails(world: TaskTrackingWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/task_tracking.feature",
    name = "Pending and completed listings partition the tasks"
)]
#[tokio::test(flavor = "multi_thread")]
async fn listings_partition_tasks(world: TaskTrackingWorld) {
    let _ = world;
}
