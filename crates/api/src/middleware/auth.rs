//! Session-token authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use shopshare_core::error::CoreError;
use shopshare_core::types::DbId;

use crate::auth::jwt;
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated user resolved from the `Authorization` header.
///
/// The header may carry `Bearer <token>` or the bare token. Use this as an
/// extractor parameter in any handler that requires authentication:
///
/// ```ignore
/// async fn my_handler(user: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = user.user_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The user's internal database id (from `claims.sub`).
    pub user_id: DbId,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(extract_token)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        let user_id = jwt::verify(token, &state.config.jwt).map_err(|_| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid or expired token, authorization denied.".into(),
            ))
        })?;

        Ok(AuthUser { user_id })
    }
}

/// Strip an optional `Bearer` scheme (any case) from a header value.
///
/// A scheme with nothing after it yields an empty token.
fn extract_token(header: &str) -> &str {
    const SCHEME: &str = "bearer";

    let header = header.trim_start();
    let rest = match header.get(..SCHEME.len()) {
        Some(prefix) if prefix.eq_ignore_ascii_case(SCHEME) => &header[SCHEME.len()..],
        _ => return header.trim(),
    };
    if rest.is_empty() || rest.starts_with(char::is_whitespace) {
        rest.trim()
    } else {
        // A token that merely starts with the letters "bearer".
        header.trim()
    }
}

#[cfg(test)]
mod tests {
    use super::extract_token;

    #[test]
    fn accepts_bearer_and_bare_tokens() {
        assert_eq!(extract_token("Bearer abc.def.ghi"), "abc.def.ghi");
        assert_eq!(extract_token("bearer abc"), "abc");
        assert_eq!(extract_token("abc.def.ghi"), "abc.def.ghi");
        assert_eq!(extract_token("  abc  "), "abc");
        assert_eq!(extract_token("Bearer "), "");
    }

    #[test]
    fn bare_scheme_is_an_empty_token() {
        assert_eq!(extract_token("Bearer"), "");
        assert_eq!(extract_token("bearer   "), "");
        assert_eq!(extract_token("  BEARER\t"), "");
    }

    #[test]
    fn scheme_is_case_insensitive() {
        assert_eq!(extract_token("BEARER abc"), "abc");
        assert_eq!(extract_token("Bearer   abc  "), "abc");
    }

    #[test]
    fn token_starting_with_scheme_letters_is_kept() {
        assert_eq!(extract_token("bearerish.token"), "bearerish.token");
    }
}
