//! Repository for the `cart_items` table.
//!
//! Add-to-cart is a single `INSERT .. ON CONFLICT` against the partial unique
//! index `uq_cart_items_active_line`, so concurrent adds for the same
//! (user, product) always converge on one active line.

use shopshare_core::cart::{MAX_LINE_QTY, STATUS_CART};
use shopshare_core::types::DbId;
use sqlx::PgPool;

use crate::models::cart_item::{
    AddCartItem, CartAddOutcome, CartLine, OrderedLine, UpsertedCartItem,
};

const COLUMNS: &str =
    "id, user_id, product_id, color, qty, size, status, created_at, updated_at";

/// Cart line columns plus the product summary, for joined listings.
const LINE_COLUMNS: &str = "c.id, c.color, c.qty, c.size, c.status, c.created_at, c.updated_at, \
                            p.id AS product_id, p.name AS product_name, \
                            p.description AS product_description, p.price AS product_price, \
                            p.thumbnail AS product_thumbnail";

/// Provides cart lifecycle persistence.
pub struct CartItemRepo;

impl CartItemRepo {
    /// Add `input.qty` of a product to the user's active cart line.
    ///
    /// Creates the line with status `"cart"` if none is active, otherwise
    /// increments its quantity. Colour and size of an existing line are kept.
    ///
    /// Returns `None` when the increment would take the active line above
    /// [`MAX_LINE_QTY`]; the line is left untouched in that case.
    pub async fn add_or_increment(
        pool: &PgPool,
        input: &AddCartItem,
    ) -> Result<Option<CartAddOutcome>, sqlx::Error> {
        // `xmax = 0` holds only for a freshly inserted tuple.
        let query = format!(
            "INSERT INTO cart_items (user_id, product_id, color, qty, size, status)
             VALUES ($1, $2, $3, $4, $5, '{STATUS_CART}')
             ON CONFLICT (user_id, product_id) WHERE status = '{STATUS_CART}'
             DO UPDATE SET qty = cart_items.qty + EXCLUDED.qty, updated_at = NOW()
             WHERE cart_items.qty <= {MAX_LINE_QTY} - EXCLUDED.qty
             RETURNING {COLUMNS}, (xmax = 0) AS inserted"
        );
        let Some(row) = sqlx::query_as::<_, UpsertedCartItem>(&query)
            .bind(input.user_id)
            .bind(input.product_id)
            .bind(&input.color)
            .bind(input.qty)
            .bind(&input.size)
            .fetch_optional(pool)
            .await?
        else {
            tracing::debug!(
                user_id = input.user_id,
                product_id = input.product_id,
                qty = input.qty,
                "Cart line at quantity cap"
            );
            return Ok(None);
        };

        tracing::debug!(
            cart_item_id = row.item.id,
            qty = row.item.qty,
            inserted = row.inserted,
            "Upserted cart line"
        );

        Ok(Some(if row.inserted {
            CartAddOutcome::Created(row.item)
        } else {
            CartAddOutcome::Incremented(row.item)
        }))
    }

    /// All lines of a user joined with product summaries, newest first.
    ///
    /// `status = None` returns every line (active and historical).
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
        status: Option<&str>,
    ) -> Result<Vec<CartLine>, sqlx::Error> {
        let query = format!(
            "SELECT {LINE_COLUMNS}
             FROM cart_items c
             JOIN products p ON p.id = c.product_id
             WHERE c.user_id = $1 AND ($2::TEXT IS NULL OR c.status = $2)
             ORDER BY c.created_at DESC, c.id DESC"
        );
        sqlx::query_as::<_, CartLine>(&query)
            .bind(user_id)
            .bind(status)
            .fetch_all(pool)
            .await
    }

    /// Delete one of the user's lines for a product, whatever its status.
    ///
    /// When several lines match (one active plus past orders), the active line
    /// goes first, then the most recently updated. Returns the deleted ID.
    pub async fn delete_for_user(
        pool: &PgPool,
        user_id: DbId,
        product_id: DbId,
    ) -> Result<Option<DbId>, sqlx::Error> {
        let query = format!(
            "DELETE FROM cart_items
             WHERE id = (
                 SELECT id FROM cart_items
                 WHERE user_id = $1 AND product_id = $2
                 ORDER BY (status = '{STATUS_CART}') DESC, updated_at DESC, id DESC
                 LIMIT 1
             )
             RETURNING id"
        );
        let deleted: Option<(DbId,)> = sqlx::query_as(&query)
            .bind(user_id)
            .bind(product_id)
            .fetch_optional(pool)
            .await?;
        Ok(deleted.map(|(id,)| id))
    }

    /// Set `status` on every listed line, regardless of owner or current status.
    ///
    /// Returns the number of rows modified. Moving a line back to `"cart"`
    /// while its owner already has an active line for the product violates
    /// `uq_cart_items_active_line`.
    pub async fn set_status_bulk(
        pool: &PgPool,
        ids: &[DbId],
        status: &str,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE cart_items SET status = $2, updated_at = NOW() WHERE id = ANY($1)",
        )
        .bind(ids)
        .bind(status)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Every checked-out line system-wide, most recently updated first.
    pub async fn list_ordered(pool: &PgPool) -> Result<Vec<OrderedLine>, sqlx::Error> {
        let query = format!(
            "SELECT {LINE_COLUMNS},
                    u.id AS user_id, u.name AS user_name, u.email AS user_email,
                    u.phone AS user_phone, u.address AS user_address
             FROM cart_items c
             JOIN products p ON p.id = c.product_id
             JOIN users u ON u.id = c.user_id
             WHERE c.status <> '{STATUS_CART}'
             ORDER BY c.updated_at DESC, c.id DESC"
        );
        sqlx::query_as::<_, OrderedLine>(&query)
            .fetch_all(pool)
            .await
    }
}
