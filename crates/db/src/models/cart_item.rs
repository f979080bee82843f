//! Cart line model, DTOs and joined read models.

use serde::Serialize;
use shopshare_core::types::{DbId, Timestamp};
use sqlx::FromRow;

use super::product::ProductSummary;

/// A row from the `cart_items` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CartItem {
    pub id: DbId,
    pub user_id: DbId,
    pub product_id: DbId,
    pub color: String,
    pub qty: i32,
    pub size: String,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for adding a product to a user's cart.
#[derive(Debug, Clone)]
pub struct AddCartItem {
    pub user_id: DbId,
    pub product_id: DbId,
    pub color: String,
    pub qty: i32,
    pub size: String,
}

/// Result of an add-to-cart: a new active line, or an existing one topped up.
#[derive(Debug, Clone)]
pub enum CartAddOutcome {
    Created(CartItem),
    Incremented(CartItem),
}

impl CartAddOutcome {
    pub fn into_item(self) -> CartItem {
        match self {
            CartAddOutcome::Created(item) | CartAddOutcome::Incremented(item) => item,
        }
    }
}

/// Upsert row: the cart line plus whether the INSERT branch was taken.
#[derive(Debug, FromRow)]
pub(crate) struct UpsertedCartItem {
    #[sqlx(flatten)]
    pub item: CartItem,
    pub inserted: bool,
}

/// A shopper's own cart line joined with its product. Carries no user id.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CartLine {
    pub id: DbId,
    pub color: String,
    pub qty: i32,
    pub size: String,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    #[sqlx(flatten)]
    pub product: ProductSummary,
}

/// Buyer fields embedded in the order-management view.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BuyerSummary {
    #[sqlx(rename = "user_id")]
    pub id: DbId,
    #[sqlx(rename = "user_name")]
    pub name: String,
    #[sqlx(rename = "user_email")]
    pub email: String,
    #[sqlx(rename = "user_phone")]
    pub phone: String,
    #[sqlx(rename = "user_address")]
    pub address: String,
}

/// A checked-out line with product and buyer summaries.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct OrderedLine {
    pub id: DbId,
    pub color: String,
    pub qty: i32,
    pub size: String,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    #[sqlx(flatten)]
    pub product: ProductSummary,
    #[sqlx(flatten)]
    pub user: BuyerSummary,
}
