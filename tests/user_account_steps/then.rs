//! Then steps for user account BDD scenarios.

use super::world::{SCENARIO_PASSWORD, UserAccountWorld, run_async};
use rstest_bdd_macros::then;
use todorail::user::services::UserAccountError;

#[then("the stored account has an assigned identifier")]
fn stored_account_has_identifier(world: &UserAccountWorld) -> Result<(), eyre::Report> {
    let account = world
        .last_registered
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing registered account in scenario world"))?;
    if account.id().is_none() {
        return Err(eyre::eyre!("expected the stored account to carry an id"));
    }
    Ok(())
}

#[then("the stored password is not the submitted plaintext")]
fn stored_password_is_encoded(world: &UserAccountWorld) -> Result<(), eyre::Report> {
    let account = world
        .last_registered
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing registered account in scenario world"))?;
    if account.password() == SCENARIO_PASSWORD {
        return Err(eyre::eyre!("plaintext credential was persisted"));
    }
    Ok(())
}

#[then(r#"the account "{username}" can be retrieved by username"#)]
fn account_found_by_username(
    world: &mut UserAccountWorld,
    username: String,
) -> Result<(), eyre::Report> {
    let found = run_async(world.service.user_by_username(&username))
        .map_err(|err| eyre::eyre!("lookup failed: {err}"))?;
    if found.username().as_str() != username {
        return Err(eyre::eyre!("expected account '{username}', got {found:?}"));
    }
    Ok(())
}

#[then("registration fails with an already-exists error")]
fn registration_fails_already_exists(world: &UserAccountWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_register_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing registration result in scenario world"))?;
    if !matches!(result, Err(UserAccountError::UsernameTaken(_))) {
        return Err(eyre::eyre!("expected username-taken error, got {result:?}"));
    }
    if !result
        .as_ref()
        .is_err_and(|err| err.kind().is_already_exists())
    {
        return Err(eyre::eyre!("error should classify as already-exists"));
    }
    Ok(())
}

#[then("the listing fails with a not-found error")]
fn listing_fails_not_found(world: &UserAccountWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_list_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing listing result in scenario world"))?;
    if !matches!(result, Err(UserAccountError::NoUsersFound)) {
        return Err(eyre::eyre!("expected no-users error, got {result:?}"));
    }
    if !result.as_ref().is_err_and(|err| err.kind().is_not_found()) {
        return Err(eyre::eyre!("error should classify as not-found"));
    }
    Ok(())
}
