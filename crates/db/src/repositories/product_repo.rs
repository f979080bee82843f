//! Repository for the `products` table.

use shopshare_core::catalog::DEFAULT_CURRENCY;
use shopshare_core::types::DbId;
use sqlx::PgPool;

use crate::models::product::{CreateProduct, Product};

const COLUMNS: &str = "id, name, description, category, sub_category, size, price, \
                       original_price, discount, currency, stock, is_in_stock, brand, images, \
                       thumbnail, ratings, reviews_count, is_featured, seller, return_policy, \
                       warranty, created_at, updated_at";

/// Provides catalog persistence.
pub struct ProductRepo;

impl ProductRepo {
    /// Insert a product, returning the stored row with defaults applied.
    pub async fn create(pool: &PgPool, input: &CreateProduct) -> Result<Product, sqlx::Error> {
        let query = format!(
            "INSERT INTO products (
                name, description, category, sub_category, size, price, original_price,
                discount, currency, stock, is_in_stock, brand, images, thumbnail, ratings,
                reviews_count, is_featured, seller, return_policy, warranty
             ) VALUES (
                $1, COALESCE($2, ''), COALESCE($3, ''), COALESCE($4, ''), COALESCE($5, ''),
                COALESCE($6, 0), COALESCE($7, 0), $8, COALESCE($9, '{DEFAULT_CURRENCY}'), COALESCE($10, 0),
                $11, COALESCE($12, ''), $13, $14, COALESCE($15, 0), COALESCE($16, 0),
                COALESCE($17, FALSE), COALESCE($18, ''), COALESCE($19, ''), COALESCE($20, '')
             )
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.category)
            .bind(&input.sub_category)
            .bind(&input.size)
            .bind(input.price)
            .bind(input.original_price)
            .bind(&input.discount)
            .bind(&input.currency)
            .bind(input.stock)
            .bind(input.is_in_stock)
            .bind(&input.brand)
            .bind(&input.images)
            .bind(&input.thumbnail)
            .bind(input.ratings)
            .bind(input.reviews_count)
            .bind(input.is_featured)
            .bind(&input.seller)
            .bind(&input.return_policy)
            .bind(&input.warranty)
            .fetch_one(pool)
            .await
    }

    /// Whether a product with this ID exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let (exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM products WHERE id = $1)")
                .bind(id)
                .fetch_one(pool)
                .await?;
        Ok(exists)
    }

    /// The whole catalog, unpaginated, in insertion order.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products ORDER BY id");
        sqlx::query_as::<_, Product>(&query).fetch_all(pool).await
    }
}
