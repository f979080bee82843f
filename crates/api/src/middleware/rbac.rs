//! Role-based access control extractor.
//!
//! Wraps [`AuthUser`] and re-reads the caller's user row on every request, so
//! a demoted administrator loses access without waiting for token expiry.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use shopshare_core::error::CoreError;
use shopshare_core::roles::Role;
use shopshare_db::repositories::UserRepo;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Requires the administrator role. Rejects with 403 Forbidden otherwise.
///
/// ```ignore
/// async fn admin_only(RequireAdmin(user): RequireAdmin) -> AppResult<Json<()>> {
///     // user is guaranteed to be an administrator here
///     Ok(Json(()))
/// }
/// ```
pub struct RequireAdmin(pub AuthUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;

        let role = UserRepo::find_by_id(&state.pool, user.user_id)
            .await?
            .and_then(|row| row.role());

        match role {
            Some(Role::Administrator) => Ok(RequireAdmin(user)),
            Some(Role::Member) | None => {
                tracing::warn!(user_id = user.user_id, "Admin route denied");
                Err(AppError::Core(CoreError::Forbidden(
                    "Unauthorized Access: Admins only".into(),
                )))
            }
        }
    }
}
