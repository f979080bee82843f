//! Shared response envelope for API handlers.
//!
//! Every successful response is `{ "success": true, "message": ..., "data": ... }`.
//! Errors use the same `success` / `message` keys (see [`crate::error`]), so
//! clients can branch on `success` alone.

use serde::Serialize;

/// Standard success envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(ApiResponse::ok("Products retrieved successfully", products)))
/// ```
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub message: &'static str,
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(message: &'static str, data: T) -> Self {
        Self {
            success: true,
            message,
            data,
        }
    }
}
