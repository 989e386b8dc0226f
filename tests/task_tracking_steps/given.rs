//! Given steps for task tracking BDD scenarios.

use super::world::{PendingTask, TaskTrackingWorld, build_request, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given(r#"a task titled "{title}" described as "{description}""#)]
fn a_task_titled(world: &mut TaskTrackingWorld, title: String, description: String) {
    world.pending_tasks.push(PendingTask { title, description });
}

#[given("the task has already been added")]
fn task_already_added(world: &mut TaskTrackingWorld) -> Result<(), eyre::Report> {
    let pending = world
        .pending_tasks
        .last()
        .ok_or_else(|| eyre::eyre!("no pending task in scenario world"))?;
    let request = build_request(&pending.title, &pending.description);
    let created = run_async(world.service.add_task(request))
        .wrap_err("add existing task for duplicate scenario")?;
    world.last_added = Some(created);
    Ok(())
}

#[given(r#"an added task titled "{title}" described as "{description}""#)]
fn added_task_titled(
    world: &mut TaskTrackingWorld,
    title: String,
    description: String,
) -> Result<(), eyre::Report> {
    let request = build_request(&title, &description);
    let created = run_async(world.service.add_task(request)).wrap_err("add task for scenario")?;
    world.last_added = Some(created);
    Ok(())
}
