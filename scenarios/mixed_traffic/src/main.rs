use unimarket_common::prelude::*;

#[tokio::main]
async fn main() -> Result<(), GooseError> {
    GooseAttack::initialize()?
        // Users are split between the two profiles by the runner, 1:1 by
        // default since neither scenario sets a weight.
        .register_scenario(authenticated_user()?)
        .register_scenario(anonymous_browser()?)
        .execute()
        .await?;

    Ok(())
}
