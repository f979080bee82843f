//! Route definitions for the catalog and cart, mounted at `/v2/product`.

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::{cart, product};
use crate::state::AppState;

/// Routes mounted at `/v2/product`.
///
/// ```text
/// POST   /add-new-product                -> add_new_product (admin only)
/// GET    /get-all-products               -> get_all_products
/// POST   /add-to-cart                    -> add_to_cart
/// GET    /fetch-cart-items               -> fetch_cart_items
/// DELETE /delete-cart-item/{product_id}  -> delete_cart_item
/// PUT    /change-cart-status             -> change_cart_status (admin only)
/// GET    /admin/ordered-items            -> ordered_items (admin only)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/add-new-product", post(product::add_new_product))
        .route("/get-all-products", get(product::get_all_products))
        .route("/add-to-cart", post(cart::add_to_cart))
        .route("/fetch-cart-items", get(cart::fetch_cart_items))
        .route(
            "/delete-cart-item/{product_id}",
            delete(cart::delete_cart_item),
        )
        .route("/change-cart-status", put(cart::change_cart_status))
        .route("/admin/ordered-items", get(cart::ordered_items))
}
