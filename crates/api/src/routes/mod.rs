pub mod auth;
pub mod health;
pub mod product;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /v1/auth/signup                              signup (public)
/// /v1/auth/login                               login (public)
/// /v1/auth/user-info                           profile (requires auth)
/// /v1/auth/update-user-info                    profile edit, multipart (requires auth)
///
/// /v2/product/add-new-product                  create product, multipart (admin only)
/// /v2/product/get-all-products                 catalog (public)
/// /v2/product/add-to-cart                      add / increment (requires auth)
/// /v2/product/fetch-cart-items                 caller's lines (requires auth)
/// /v2/product/delete-cart-item/{product_id}    remove one line (requires auth)
/// /v2/product/change-cart-status               bulk transition (admin only)
/// /v2/product/admin/ordered-items              order view (admin only)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Accounts and session tokens.
        .nest("/v1/auth", auth::router())
        // Catalog and cart lifecycle.
        .nest("/v2/product", product::router())
}
