//! Route definitions for the `/auth` resource.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Routes mounted at `/v1/auth`.
///
/// ```text
/// POST /signup            -> signup
/// POST /login             -> login
/// GET  /user-info         -> user_info (requires auth)
/// PUT  /update-user-info  -> update_user_info (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/signup", post(auth::signup))
        .route("/login", post(auth::login))
        .route("/user-info", get(auth::user_info))
        .route("/update-user-info", put(auth::update_user_info))
}
