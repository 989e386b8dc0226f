//! Then steps for task tracking BDD scenarios.

use super::world::{TaskTrackingWorld, run_async};
use rstest_bdd_macros::then;
use todorail::task::services::TaskTrackingError;

#[then("the stored task has an assigned identifier")]
fn stored_task_has_identifier(world: &TaskTrackingWorld) -> Result<(), eyre::Report> {
    let task = world
        .last_added
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing added task in scenario world"))?;
    if task.id().is_none() {
        return Err(eyre::eyre!("expected the stored task to carry an id"));
    }
    Ok(())
}

#[then(r#"the task "{title}" can be retrieved by title"#)]
fn task_found_by_title(world: &mut TaskTrackingWorld, title: String) -> Result<(), eyre::Report> {
    let found = run_async(world.service.task_by_title(&title))
        .map_err(|err| eyre::eyre!("lookup failed: {err}"))?;
    if found.title().as_str() != title {
        return Err(eyre::eyre!("expected task titled '{title}', got {found:?}"));
    }
    Ok(())
}

#[then("the addition fails with an already-exists error")]
fn addition_fails_already_exists(world: &TaskTrackingWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_add_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing addition result in scenario world"))?;
    if !matches!(result, Err(TaskTrackingError::TitleTaken(_))) {
        return Err(eyre::eyre!("expected title-taken error, got {result:?}"));
    }
    if !result
        .as_ref()
        .is_err_and(|err| err.kind().is_already_exists())
    {
        return Err(eyre::eyre!("error should classify as already-exists"));
    }
    Ok(())
}

#[then(r#"looking up "{title}" fails with a not-found error"#)]
fn lookup_fails_not_found(world: &mut TaskTrackingWorld, title: String) -> Result<(), eyre::Report> {
    let result = run_async(world.service.task_by_title(&title));
    if !result.as_ref().is_err_and(|err| err.kind().is_not_found()) {
        return Err(eyre::eyre!("expected not-found error, got {result:?}"));
    }
    world.last_lookup_result = Some(result);
    Ok(())
}

#[then(r#"the pending listing contains only "{title}""#)]
fn pending_listing_contains_only(
    world: &mut TaskTrackingWorld,
    title: String,
) -> Result<(), eyre::Report> {
    let pending = run_async(world.service.pending_tasks())
        .map_err(|err| eyre::eyre!("pending listing failed: {err}"))?;
    let titles: Vec<&str> = pending.iter().map(|t| t.title().as_str()).collect();
    if titles != [title.as_str()] {
        return Err(eyre::eyre!(
            "expected pending listing ['{title}'], got {titles:?}"
        ));
    }
    Ok(())
}

#[then(r#"the completed listing contains only "{title}""#)]
fn completed_listing_contains_only(
    world: &mut TaskTrackingWorld,
    title: String,
) -> Result<(), eyre::Report> {
    let completed = run_async(world.service.completed_tasks())
        .map_err(|err| eyre::eyre!("completed listing failed: {err}"))?;
    let titles: Vec<&str> = completed.iter().map(|t| t.title().as_str()).collect();
    if titles != [title.as_str()] {
        return Err(eyre::eyre!(
            "expected completed listing ['{title}'], got {titles:?}"
        ));
    }
    Ok(())
}
