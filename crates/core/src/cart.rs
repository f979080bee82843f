//! Cart line status rules.
//!
//! Status is an open-ended string. `"cart"` is the distinguished "still
//! shopping" value; anything else is a post-checkout state chosen by an
//! administrator (e.g. `"ordered"`, `"shipped"`, `"delivered"`).

use crate::error::CoreError;
use crate::types::DbId;

/// Status of an active (not yet checked out) cart line.
///
/// The partial unique index `uq_cart_items_active_line` is keyed on this
/// literal; both must change together.
pub const STATUS_CART: &str = "cart";

/// Colour recorded when the client does not choose one.
pub const DEFAULT_COLOR: &str = "black";
/// Size recorded when the client does not choose one.
pub const DEFAULT_SIZE: &str = "1";
/// Quantity added when the client does not send one.
pub const DEFAULT_QTY: i32 = 1;
/// Largest quantity a single cart line may hold.
pub const MAX_LINE_QTY: i32 = 10_000;

/// Upper bound on a status label.
pub const MAX_STATUS_LENGTH: usize = 32;

pub fn validate_quantity(qty: i32) -> Result<(), CoreError> {
    if qty < 1 {
        return Err(CoreError::Validation(format!(
            "qty must be at least 1, got {qty}"
        )));
    }
    if qty > MAX_LINE_QTY {
        return Err(CoreError::Validation(format!(
            "qty must be at most {MAX_LINE_QTY}, got {qty}"
        )));
    }
    Ok(())
}

/// Validate a target status for a bulk transition.
pub fn validate_status(status: &str) -> Result<(), CoreError> {
    if status.trim().is_empty() {
        return Err(CoreError::Validation("status must not be empty".into()));
    }
    if status != status.trim() {
        return Err(CoreError::Validation(
            "status must not have leading or trailing whitespace".into(),
        ));
    }
    if status.chars().count() > MAX_STATUS_LENGTH {
        return Err(CoreError::Validation(format!(
            "status must be at most {MAX_STATUS_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Validate the id list of a bulk transition.
pub fn validate_item_ids(ids: &[DbId]) -> Result<(), CoreError> {
    if ids.is_empty() {
        return Err(CoreError::Validation("ids must not be empty".into()));
    }
    if let Some(bad) = ids.iter().find(|id| **id <= 0) {
        return Err(CoreError::Validation(format!(
            "ids must be positive, got {bad}"
        )));
    }
    Ok(())
}
