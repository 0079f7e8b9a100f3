use unimarket_common::prelude::*;

#[tokio::main]
async fn main() -> Result<(), GooseError> {
    GooseAttack::initialize()?
        .register_scenario(anonymous_browser()?)
        .execute()
        .await?;

    Ok(())
}
