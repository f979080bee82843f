//! Product entity model and DTOs.

use serde::Serialize;
use shopshare_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `products` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Product {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub category: String,
    pub sub_category: String,
    pub size: String,
    pub price: f64,
    pub original_price: f64,
    pub discount: Option<String>,
    pub currency: String,
    pub stock: i32,
    pub is_in_stock: bool,
    pub brand: String,
    pub images: Vec<String>,
    pub thumbnail: Option<String>,
    pub ratings: f64,
    pub reviews_count: i32,
    pub is_featured: bool,
    pub seller: String,
    pub return_policy: String,
    pub warranty: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting a product. `None` text fields fall back to column defaults.
#[derive(Debug, Default)]
pub struct CreateProduct {
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub sub_category: Option<String>,
    pub size: Option<String>,
    pub price: Option<f64>,
    pub original_price: Option<f64>,
    pub discount: Option<String>,
    pub currency: Option<String>,
    pub stock: Option<i32>,
    pub is_in_stock: bool,
    pub brand: Option<String>,
    pub images: Vec<String>,
    pub thumbnail: Option<String>,
    pub ratings: Option<f64>,
    pub reviews_count: Option<i32>,
    pub is_featured: Option<bool>,
    pub seller: Option<String>,
    pub return_policy: Option<String>,
    pub warranty: Option<String>,
}

/// Product fields embedded in cart listings.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProductSummary {
    #[sqlx(rename = "product_id")]
    pub id: DbId,
    #[sqlx(rename = "product_name")]
    pub name: String,
    #[sqlx(rename = "product_description")]
    pub description: String,
    #[sqlx(rename = "product_price")]
    pub price: f64,
    #[sqlx(rename = "product_thumbnail")]
    pub thumbnail: Option<String>,
}
