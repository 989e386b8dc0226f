//! When steps for task tracking BDD scenarios.

use super::world::{TaskTrackingWorld, build_request, run_async};
use rstest_bdd_macros::when;

#[when("the task is added")]
fn add_the_task(world: &mut TaskTrackingWorld) -> Result<(), eyre::Report> {
    let pending = world
        .pending_tasks
        .last()
        .ok_or_else(|| eyre::eyre!("no pending task in scenario world"))?;
    let request = build_request(&pending.title, &pending.description);
    match run_async(world.service.add_task(request)) {
        Ok(task) => {
            world.last_added = Some(task);
            Ok(())
        }
        Err(err) => Err(eyre::eyre!("unexpected addition failure: {err}")),
    }
}

#[when("a second task with the same title is added")]
fn add_duplicate_task(world: &mut TaskTrackingWorld) -> Result<(), eyre::Report> {
    let pending = world
        .pending_tasks
        .last()
        .ok_or_else(|| eyre::eyre!("no pending task in scenario world"))?;
    let request = build_request(&pending.title, &pending.description);
    world.last_add_result = Some(run_async(world.service.add_task(request)));
    Ok(())
}

#[when(r#"the task "{title}" is deleted"#)]
fn delete_the_task(world: &mut TaskTrackingWorld, title: String) -> Result<(), eyre::Report> {
    run_async(world.service.delete_task(&title))
        .map_err(|err| eyre::eyre!("deletion failed: {err}"))?;
    Ok(())
}

#[when(r#"the task "{title}" is completed"#)]
fn complete_the_task(world: &mut TaskTrackingWorld, title: String) -> Result<(), eyre::Report> {
    let resolved = run_async(world.service.task_by_title(&title))
        .map_err(|err| eyre::eyre!("lookup failed: {err}"))?;
    let id = resolved
        .id()
        .ok_or_else(|| eyre::eyre!("stored task has no identifier"))?;
    run_async(world.service.complete_task(id))
        .map_err(|err| eyre::eyre!("completion failed: {err}"))?;
    Ok(())
}
