//! Given steps for user account BDD scenarios.

use super::world::{PendingAccount, UserAccountWorld, build_request, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given(r#"an account named "{username}" with email "{email}""#)]
fn an_account_named(world: &mut UserAccountWorld, username: String, email: String) {
    world
        .pending_accounts
        .push(PendingAccount { username, email });
}

#[given("the account has already been registered")]
fn account_already_registered(world: &mut UserAccountWorld) -> Result<(), eyre::Report> {
    let pending = world
        .pending_accounts
        .last()
        .ok_or_else(|| eyre::eyre!("no pending account in scenario world"))?;
    let request = build_request(&pending.username, &pending.email);
    let created = run_async(world.service.register_user(request))
        .wrap_err("register existing account for duplicate scenario")?;
    world.last_registered = Some(created);
    Ok(())
}
