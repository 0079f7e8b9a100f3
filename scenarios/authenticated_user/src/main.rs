use unimarket_common::prelude::*;

#[tokio::main]
async fn main() -> Result<(), GooseError> {
    GooseAttack::initialize()?
        .register_scenario(authenticated_user()?)
        .execute()
        .await?;

    Ok(())
}
