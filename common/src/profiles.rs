use crate::account::{view_cart, view_cart_count, view_my_listings, view_profile, view_purchases};
use crate::browse::{
    anonymous_featured_products, anonymous_landing, anonymous_product_search,
    anonymous_search_page, search_full, search_products, view_featured_products, view_landing,
};
use crate::signin::sign_in;
use goose::prelude::*;
use std::time::Duration;

/// Simulates a signed-in user: one sign-in at start-up, then a weighted mix
/// of public browsing and token-gated account requests.
pub fn authenticated_user() -> Result<Scenario, GooseError> {
    Ok(scenario!("AuthenticatedUser")
        .set_wait_time(Duration::from_secs(1), Duration::from_secs(4))?
        .register_transaction(transaction!(sign_in).set_on_start().set_name("sign in"))
        // Public browsing, high frequency.
        .register_transaction(
            transaction!(view_featured_products)
                .set_weight(5)?
                .set_name("browse featured products"),
        )
        .register_transaction(
            transaction!(search_products)
                .set_weight(4)?
                .set_name("search products (api)"),
        )
        .register_transaction(
            transaction!(search_full)
                .set_weight(3)?
                .set_name("search products (page)"),
        )
        .register_transaction(transaction!(view_landing).set_weight(2)?.set_name("view landing"))
        // Authenticated, medium frequency.
        .register_transaction(transaction!(view_profile).set_weight(3)?.set_name("view profile"))
        .register_transaction(
            transaction!(view_cart_count)
                .set_weight(3)?
                .set_name("view cart count"),
        )
        .register_transaction(transaction!(view_cart).set_weight(2)?.set_name("view cart"))
        .register_transaction(
            transaction!(view_my_listings)
                .set_weight(1)?
                .set_name("view my listings"),
        )
        .register_transaction(
            transaction!(view_purchases)
                .set_weight(1)?
                .set_name("view purchase history"),
        ))
}

/// Simulates a user who never signs in: public pages and search only.
pub fn anonymous_browser() -> Result<Scenario, GooseError> {
    Ok(scenario!("AnonymousBrowser")
        .set_wait_time(Duration::from_secs(1), Duration::from_secs(5))?
        .register_transaction(
            transaction!(anonymous_featured_products)
                .set_weight(5)?
                .set_name("featured products"),
        )
        .register_transaction(
            transaction!(anonymous_product_search)
                .set_weight(4)?
                .set_name("product search"),
        )
        .register_transaction(
            transaction!(anonymous_search_page)
                .set_weight(2)?
                .set_name("search page"),
        )
        .register_transaction(transaction!(anonymous_landing).set_weight(1)?.set_name("landing")))
}
