use goose::prelude::*;

/// Browses the featured-products listing.
pub async fn view_featured_products(user: &mut GooseUser) -> TransactionResult {
    user.get("/api/featured-products").await?;

    Ok(())
}

/// Searches the product API with a fixed query and limit.
pub async fn search_products(user: &mut GooseUser) -> TransactionResult {
    user.get_named("/api/products/search?q=book&limit=20", "/api/products/search")
        .await?;

    Ok(())
}

/// Loads the full search results page.
pub async fn search_full(user: &mut GooseUser) -> TransactionResult {
    user.get_named("/search?q=book", "/search").await?;

    Ok(())
}

/// Loads the landing page, then refreshes the featured products the way the
/// page itself does.
pub async fn view_landing(user: &mut GooseUser) -> TransactionResult {
    user.get_named("/", "/ [landing]").await?;
    user.get("/api/featured-products").await?;

    Ok(())
}

// Anonymous variants are named apart so mixed runs keep the two traffic
// classes separate in the report.

pub async fn anonymous_featured_products(user: &mut GooseUser) -> TransactionResult {
    user.get_named("/api/featured-products", "/api/featured-products [anon]")
        .await?;

    Ok(())
}

/// Unfiltered product search, limit only.
pub async fn anonymous_product_search(user: &mut GooseUser) -> TransactionResult {
    user.get_named("/api/products/search?limit=15", "/api/products/search [anon]")
        .await?;

    Ok(())
}

pub async fn anonymous_search_page(user: &mut GooseUser) -> TransactionResult {
    user.get_named("/search?q=textbook", "/search [anon]").await?;

    Ok(())
}

pub async fn anonymous_landing(user: &mut GooseUser) -> TransactionResult {
    user.get_named("/", "/ [anon]").await?;

    Ok(())
}
