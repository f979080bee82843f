//! Catalog product drafts: parsing form fields and validating them.
//!
//! Product creation arrives as a multipart form, so every value starts life as
//! text. [`ProductDraft::from_form`] parses and validates in one pass and
//! reports every failing field together.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use validator::Validate;

use crate::error::CoreError;
use crate::validation::{finish, validate_fields};

/// Discount label shape, e.g. `"15%"`.
pub const DISCOUNT_PATTERN: &str = r"^[0-9]+%$";

/// Currency label used when none is given.
pub const DEFAULT_CURRENCY: &str = "Rs.";

static DISCOUNT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(DISCOUNT_PATTERN).expect("valid regex"));

/// Validated product input, before any upload paths are attached.
#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct ProductDraft {
    #[validate(length(min = 1, message = "Product name is required"))]
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub sub_category: Option<String>,
    pub size: Option<String>,
    #[validate(range(min = 0.0, message = "must not be negative"))]
    pub price: Option<f64>,
    #[validate(range(min = 0.0, message = "must not be negative"))]
    pub original_price: Option<f64>,
    pub discount: Option<String>,
    pub currency: Option<String>,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub stock: Option<i32>,
    pub is_in_stock: Option<bool>,
    pub brand: Option<String>,
    #[validate(range(min = 0.0, max = 5.0, message = "must be between 0 and 5"))]
    pub ratings: Option<f64>,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub reviews_count: Option<i32>,
    pub is_featured: Option<bool>,
    pub seller: Option<String>,
    pub return_policy: Option<String>,
    pub warranty: Option<String>,
}

impl ProductDraft {
    /// Build a draft from raw form fields.
    ///
    /// Keys are matched in both the camelCase spelling sent by the storefront
    /// (`subCategory`, `originalPrice`, ...) and snake_case. Blank values are
    /// treated as absent.
    pub fn from_form(fields: &HashMap<String, String>) -> Result<Self, CoreError> {
        let mut errors = Vec::new();

        let draft = ProductDraft {
            name: text(fields, &["name"]).unwrap_or_default(),
            description: text(fields, &["description"]),
            category: text(fields, &["category"]),
            sub_category: text(fields, &["subCategory", "sub_category"]),
            size: text(fields, &["size", "Size"]),
            price: number(fields, &["price"], &mut errors),
            original_price: number(fields, &["originalPrice", "original_price"], &mut errors),
            discount: text(fields, &["discount"]),
            currency: text(fields, &["currency"]),
            stock: integer(fields, &["stock"], &mut errors),
            is_in_stock: flag(fields, &["isInStock", "is_in_stock"], &mut errors),
            brand: text(fields, &["brand"]),
            ratings: number(fields, &["ratings"], &mut errors),
            reviews_count: integer(fields, &["reviewsCount", "reviews_count"], &mut errors),
            is_featured: flag(fields, &["isFeatured", "is_featured"], &mut errors),
            seller: text(fields, &["seller"]),
            return_policy: text(fields, &["returnPolicy", "return_policy"]),
            warranty: text(fields, &["warranty"]),
        };

        if let Err(CoreError::InvalidFields(found)) = validate_fields(&draft) {
            errors.extend(found);
        }
        if let Some(discount) = &draft.discount {
            if !DISCOUNT_RE.is_match(discount) {
                errors.push(format!(
                    "discount: '{discount}' must look like '15%'"
                ));
            }
        }

        errors.sort();
        errors.dedup();
        finish(errors)?;
        Ok(draft)
    }

    /// Stock flag to store: explicit value, else derived from the stock count.
    pub fn resolved_in_stock(&self) -> bool {
        self.is_in_stock
            .unwrap_or_else(|| self.stock.unwrap_or(0) > 0)
    }
}

fn text(fields: &HashMap<String, String>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|k| fields.get(*k))
        .map(|v| v.trim())
        .find(|v| !v.is_empty())
        .map(str::to_string)
}

fn number(
    fields: &HashMap<String, String>,
    keys: &[&str],
    errors: &mut Vec<String>,
) -> Option<f64> {
    let raw = text(fields, keys)?;
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() => Some(v),
        _ => {
            errors.push(format!("{}: '{raw}' is not a valid number", keys[0]));
            None
        }
    }
}

fn integer(
    fields: &HashMap<String, String>,
    keys: &[&str],
    errors: &mut Vec<String>,
) -> Option<i32> {
    let raw = text(fields, keys)?;
    match raw.parse::<i32>() {
        Ok(v) => Some(v),
        Err(_) => {
            errors.push(format!("{}: '{raw}' is not a valid integer", keys[0]));
            None
        }
    }
}

fn flag(
    fields: &HashMap<String, String>,
    keys: &[&str],
    errors: &mut Vec<String>,
) -> Option<bool> {
    let raw = text(fields, keys)?;
    match raw.to_ascii_lowercase().as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => {
            errors.push(format!("{}: '{raw}' is not a valid boolean", keys[0]));
            None
        }
    }
}
