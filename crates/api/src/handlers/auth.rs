//! Handlers for the `/auth` resource (signup, login, profile).

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use shopshare_core::account::{
    is_valid_email, non_blank, parse_pincode, validate_login, validate_signup,
};
use shopshare_core::error::CoreError;
use shopshare_core::roles::Role;
use shopshare_core::types::DbId;
use shopshare_db::models::user::{CreateUser, UpdateProfile, User, UserProfile};
use shopshare_db::repositories::UserRepo;

use crate::auth::jwt;
use crate::auth::password::{hash_password, verify_password};
use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::auth::AuthUser;
use crate::response::ApiResponse;
use crate::state::AppState;
use crate::uploads::{accept_image, discard_uploads, read_form, store_images};

/// Multipart field carrying a new profile picture.
const PROFILE_PICTURE_FIELD: &str = "profilePicture";

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/signup`.
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Successful signup / login payload.
#[derive(Debug, Serialize)]
pub struct AuthPayload {
    pub user: AccountSummary,
    pub token: String,
}

/// Public account fields embedded in [`AuthPayload`].
#[derive(Debug, Serialize)]
pub struct AccountSummary {
    pub id: DbId,
    pub name: String,
    pub email: String,
}

impl From<&User> for AccountSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/signup
///
/// Register a member account and return a session token.
pub async fn signup(
    State(state): State<AppState>,
    AppJson(input): AppJson<SignupRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<AuthPayload>>)> {
    validate_signup(&input.name, &input.email, &input.password)?;

    if UserRepo::find_by_email(&state.pool, &input.email)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(
            "User already exists".into(),
        )));
    }

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    // A concurrent signup for the same email loses on `uq_users_email` (409).
    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            name: input.name.trim().to_string(),
            email: input.email,
            password_hash,
            role: Role::Member,
        },
    )
    .await?;

    let token = issue_token(&state, user.id)?;
    tracing::info!(user_id = user.id, "User registered");

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(
            "User registered successfully",
            AuthPayload {
                user: AccountSummary::from(&user),
                token,
            },
        )),
    ))
}

/// POST /api/v1/auth/login
///
/// Verify email + password and return a fresh session token.
pub async fn login(
    State(state): State<AppState>,
    AppJson(input): AppJson<LoginRequest>,
) -> AppResult<Json<ApiResponse<AuthPayload>>> {
    validate_login(&input.email, &input.password)?;

    let user = UserRepo::find_by_email(&state.pool, &input.email)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Missing("User not found".into())))?;

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        tracing::info!(user_id = user.id, "Login rejected: wrong password");
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid password".into(),
        )));
    }

    let token = issue_token(&state, user.id)?;
    tracing::info!(user_id = user.id, "User logged in");

    Ok(Json(ApiResponse::ok(
        "Login successfully",
        AuthPayload {
            user: AccountSummary::from(&user),
            token,
        },
    )))
}

/// GET /api/v1/auth/user-info
///
/// The caller's profile, without the password hash.
pub async fn user_info(
    State(state): State<AppState>,
    auth: AuthUser,
) -> AppResult<Json<ApiResponse<UserProfile>>> {
    let user = find_user(&state, auth.user_id).await?;
    Ok(Json(ApiResponse::ok(
        "User information retrieved successfully",
        UserProfile::from(user),
    )))
}

/// PUT /api/v1/auth/update-user-info
///
/// Multipart profile edit. Blank or missing fields keep their stored value.
/// A `profilePicture` file part replaces the stored picture; it is removed
/// again if the update fails. The role cannot be changed through this
/// endpoint.
pub async fn update_user_info(
    State(state): State<AppState>,
    auth: AuthUser,
    mut multipart: Multipart,
) -> AppResult<Json<ApiResponse<UserProfile>>> {
    let mut form = read_form(&mut multipart, &[PROFILE_PICTURE_FIELD]).await?;
    let current = find_user(&state, auth.user_id).await?;

    if form.take("role").is_some() {
        tracing::warn!(user_id = auth.user_id, "Ignoring role in profile update");
    }

    let email = non_blank(form.take("email"));
    if let Some(email) = &email {
        if !is_valid_email(email) {
            return Err(AppError::Core(CoreError::InvalidFields(vec![
                "email: Invalid email format".into(),
            ])));
        }
        if let Some(owner) = UserRepo::find_by_email(&state.pool, email).await? {
            if owner.id != current.id {
                return Err(AppError::Core(CoreError::Conflict(
                    "Email is already in use".into(),
                )));
            }
        }
    }

    let pincode = parse_pincode(form.take("pincode"))?;
    let name = non_blank(form.take("name"));
    let phone = non_blank(form.take("phone"));
    let address = non_blank(form.take("address"));
    let gender = non_blank(form.take("gender"));
    let picture_text = non_blank(form.take(PROFILE_PICTURE_FIELD));

    let pictures: Vec<_> = form.files_named(PROFILE_PICTURE_FIELD).collect();
    if pictures.len() > 1 {
        return Err(AppError::Core(CoreError::Validation(format!(
            "{PROFILE_PICTURE_FIELD}: only one file is allowed"
        ))));
    }
    let accepted = pictures
        .first()
        .map(|file| accept_image(file))
        .transpose()?;
    let stored = store_images(&state.config.upload_dir, accepted.as_slice()).await?;
    let profile_picture = stored.first().cloned().or(picture_text);

    let edit = UpdateProfile {
        name,
        email,
        phone,
        address,
        profile_picture,
        pincode,
        gender,
    };

    let updated = match UserRepo::update_profile(&state.pool, current.id, &edit).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            discard_uploads(&state.config.upload_dir, &stored).await;
            return Err(AppError::Core(CoreError::NotFound {
                entity: "User",
                id: current.id,
            }));
        }
        Err(err) => {
            discard_uploads(&state.config.upload_dir, &stored).await;
            return Err(err.into());
        }
    };
    tracing::info!(user_id = updated.id, "Profile updated");

    Ok(Json(ApiResponse::ok(
        "Profile updated successfully",
        UserProfile::from(updated),
    )))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn find_user(state: &AppState, id: DbId) -> AppResult<User> {
    UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))
}

fn issue_token(state: &AppState, user_id: DbId) -> AppResult<String> {
    jwt::issue(user_id, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))
}
