//! When steps for user account BDD scenarios.

use super::world::{UserAccountWorld, build_request, run_async};
use rstest_bdd_macros::when;

#[when("the account is registered")]
fn register_the_account(world: &mut UserAccountWorld) -> Result<(), eyre::Report> {
    let pending = world
        .pending_accounts
        .last()
        .ok_or_else(|| eyre::eyre!("no pending account in scenario world"))?;
    let request = build_request(&pending.username, &pending.email);
    match run_async(world.service.register_user(request)) {
        Ok(account) => {
            world.last_registered = Some(account);
            Ok(())
        }
        Err(err) => Err(eyre::eyre!("unexpected registration failure: {err}")),
    }
}

#[when("a second account with the same username is registered")]
fn register_duplicate_account(world: &mut UserAccountWorld) -> Result<(), eyre::Report> {
    let pending = world
        .pending_accounts
        .last()
        .ok_or_else(|| eyre::eyre!("no pending account in scenario world"))?;
    // A fresh email keeps the collision on the username alone.
    let request = build_request(&pending.username, "fresh@example.com");
    world.last_register_result = Some(run_async(world.service.register_user(request)));
    Ok(())
}

#[when("all accounts are listed")]
fn list_all_accounts(world: &mut UserAccountWorld) {
    world.last_list_result = Some(run_async(world.service.all_users()));
}
