use crate::session::Session;
use goose::prelude::*;

/// Issues a bearer-authenticated GET, or does nothing when the user never
/// obtained a token.
async fn bearer_get(user: &mut GooseUser, path: &'static str) -> TransactionResult {
    let bearer = match user.get_session_data::<Session>() {
        Some(session) => session.bearer(),
        None => {
            // Signed-out instance; the action stays a no-op for its lifetime.
            log::debug!("no session token, skipping {}", path);
            return Ok(());
        }
    };

    let request_builder = user
        .get_request_builder(&GooseMethod::Get, path)?
        .header("Authorization", bearer);
    let authenticated_request = GooseRequest::builder()
        .method(GooseMethod::Get)
        .path(path)
        .set_request_builder(request_builder)
        .build();
    user.request(authenticated_request).await?;

    Ok(())
}

/// Views the signed-in user's profile.
pub async fn view_profile(user: &mut GooseUser) -> TransactionResult {
    bearer_get(user, "/api/profile").await
}

/// Polls the cart badge counter.
pub async fn view_cart_count(user: &mut GooseUser) -> TransactionResult {
    bearer_get(user, "/api/cart/count").await
}

/// Views the cart contents.
pub async fn view_cart(user: &mut GooseUser) -> TransactionResult {
    bearer_get(user, "/api/cart").await
}

/// Views the user's own listings.
pub async fn view_my_listings(user: &mut GooseUser) -> TransactionResult {
    bearer_get(user, "/api/my-listings").await
}

/// Views the purchase history.
pub async fn view_purchases(user: &mut GooseUser) -> TransactionResult {
    bearer_get(user, "/api/purchases").await
}
