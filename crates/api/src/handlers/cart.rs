//! Handlers for the cart lifecycle: shopper cart operations and the
//! administrator order view.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use shopshare_core::cart::{
    validate_item_ids, validate_quantity, validate_status, DEFAULT_COLOR, DEFAULT_QTY,
    DEFAULT_SIZE, MAX_LINE_QTY,
};
use shopshare_core::error::CoreError;
use shopshare_core::types::DbId;
use shopshare_db::models::cart_item::{AddCartItem, CartAddOutcome, CartItem, CartLine, OrderedLine};
use shopshare_db::repositories::{CartItemRepo, ProductRepo};

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::query::StatusFilter;
use crate::response::ApiResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /add-to-cart`.
#[derive(Debug, Deserialize)]
pub struct AddToCartRequest {
    #[serde(alias = "productId")]
    pub product_id: DbId,
    pub color: Option<String>,
    pub qty: Option<i32>,
    pub size: Option<String>,
}

/// Request body for `PUT /change-cart-status`.
#[derive(Debug, Deserialize)]
pub struct ChangeStatusRequest {
    #[serde(default, alias = "itemIds")]
    pub ids: Vec<DbId>,
    #[serde(default)]
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct DeletedLine {
    pub deleted_id: DbId,
}

#[derive(Debug, Serialize)]
pub struct StatusChange {
    pub modified_count: u64,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v2/product/add-to-cart
///
/// Adds to the caller's active line for the product, creating it if needed.
/// Responds 201 for a new line and 200 when an existing line was topped up.
/// An add that would push the line past [`MAX_LINE_QTY`] is rejected.
pub async fn add_to_cart(
    State(state): State<AppState>,
    auth: AuthUser,
    AppJson(input): AppJson<AddToCartRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<CartItem>>)> {
    let qty = input.qty.unwrap_or(DEFAULT_QTY);
    validate_quantity(qty)?;

    if !ProductRepo::exists(&state.pool, input.product_id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id: input.product_id,
        }));
    }

    let outcome = CartItemRepo::add_or_increment(
        &state.pool,
        &AddCartItem {
            user_id: auth.user_id,
            product_id: input.product_id,
            color: choice_or(input.color, DEFAULT_COLOR),
            qty,
            size: choice_or(input.size, DEFAULT_SIZE),
        },
    )
    .await?
    .ok_or_else(|| {
        AppError::Core(CoreError::Validation(format!(
            "qty: a cart line cannot hold more than {MAX_LINE_QTY}"
        )))
    })?;

    let (status, message) = match &outcome {
        CartAddOutcome::Created(_) => (StatusCode::CREATED, "Product added to cart"),
        CartAddOutcome::Incremented(_) => (StatusCode::OK, "Cart quantity updated"),
    };
    let item = outcome.into_item();
    tracing::info!(
        user_id = auth.user_id,
        product_id = item.product_id,
        cart_item_id = item.id,
        qty = item.qty,
        "Cart line saved"
    );

    Ok((status, Json(ApiResponse::ok(message, item))))
}

/// GET /api/v2/product/fetch-cart-items[?status=...]
///
/// The caller's lines of every status unless narrowed by `status`.
pub async fn fetch_cart_items(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(filter): Query<StatusFilter>,
) -> AppResult<Json<ApiResponse<Vec<CartLine>>>> {
    let lines = CartItemRepo::list_for_user(&state.pool, auth.user_id, filter.as_deref()).await?;
    Ok(Json(ApiResponse::ok("Cart items retrieved successfully", lines)))
}

/// DELETE /api/v2/product/delete-cart-item/{product_id}
///
/// Removes one of the caller's lines for the product, the active one first.
pub async fn delete_cart_item(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(product_id): Path<DbId>,
) -> AppResult<Json<ApiResponse<DeletedLine>>> {
    let deleted_id = CartItemRepo::delete_for_user(&state.pool, auth.user_id, product_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Missing("Item not found in cart".into())))?;

    tracing::info!(
        user_id = auth.user_id,
        product_id,
        cart_item_id = deleted_id,
        "Cart line deleted"
    );
    Ok(Json(ApiResponse::ok(
        "Item removed from cart",
        DeletedLine { deleted_id },
    )))
}

/// PUT /api/v2/product/change-cart-status
///
/// Administrator bulk transition. Applies to every listed line regardless of
/// owner or current status.
pub async fn change_cart_status(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    AppJson(input): AppJson<ChangeStatusRequest>,
) -> AppResult<Json<ApiResponse<StatusChange>>> {
    validate_item_ids(&input.ids)?;
    validate_status(&input.status)?;

    let modified_count = CartItemRepo::set_status_bulk(&state.pool, &input.ids, &input.status).await?;
    if modified_count == 0 {
        return Err(AppError::Core(CoreError::Missing(
            "No cart items found for the given ids".into(),
        )));
    }

    tracing::info!(
        admin_id = admin.user_id,
        status = %input.status,
        requested = input.ids.len(),
        modified_count,
        "Cart status changed"
    );
    Ok(Json(ApiResponse::ok(
        "Cart status updated successfully",
        StatusChange { modified_count },
    )))
}

/// GET /api/v2/product/admin/ordered-items
///
/// Every checked-out line with product and buyer summaries.
pub async fn ordered_items(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<ApiResponse<Vec<OrderedLine>>>> {
    let lines = CartItemRepo::list_ordered(&state.pool).await?;
    Ok(Json(ApiResponse::ok(
        "Ordered items retrieved successfully",
        lines,
    )))
}

/// A client choice, or `default` when absent or blank.
fn choice_or(value: Option<String>, default: &str) -> String {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_choice_falls_back_to_default() {
        assert_eq!(choice_or(None, DEFAULT_COLOR), "black");
        assert_eq!(choice_or(Some("  ".into()), DEFAULT_SIZE), "1");
        assert_eq!(choice_or(Some(" red ".into()), DEFAULT_COLOR), "red");
    }

    #[test]
    fn add_request_accepts_camel_case_product_id() {
        let req: AddToCartRequest =
            serde_json::from_value(serde_json::json!({ "productId": 7, "qty": 2 })).unwrap();
        assert_eq!(req.product_id, 7);
        assert_eq!(req.qty, Some(2));
        assert!(req.color.is_none());
    }

    #[test]
    fn status_request_defaults_to_empty() {
        let req: ChangeStatusRequest = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(req.ids.is_empty());
        assert!(req.status.is_empty());
        assert!(validate_item_ids(&req.ids).is_err());
    }
}
