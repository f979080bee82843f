//! User entity model and DTOs.

use serde::Serialize;
use shopshare_core::roles::Role;
use shopshare_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// Full user row from the `users` table.
///
/// Contains the password hash -- NEVER serialize this to API responses directly.
/// Use [`UserProfile`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub gender: String,
    pub phone: String,
    pub address: String,
    pub profile_picture: Option<String>,
    pub pincode: i32,
    /// Raw stored role code; decode with [`User::role`].
    pub role: i16,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl User {
    /// Decoded role. `None` means the row carries an unknown code.
    pub fn role(&self) -> Option<Role> {
        Role::from_code(self.role)
    }
}

/// Safe user representation for API responses (no password hash).
#[derive(Debug, Clone, Serialize)]
pub struct UserProfile {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub gender: String,
    pub phone: String,
    pub address: String,
    pub profile_picture: Option<String>,
    pub pincode: i32,
    pub role: Role,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        let role = user.role().unwrap_or_default();
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            gender: user.gender,
            phone: user.phone,
            address: user.address,
            profile_picture: user.profile_picture,
            pincode: user.pincode,
            role,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// DTO for creating a new user. The password must already be hashed.
#[derive(Debug)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}

/// DTO for a profile edit. `None` keeps the stored value.
#[derive(Debug, Default)]
pub struct UpdateProfile {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub profile_picture: Option<String>,
    pub pincode: Option<i32>,
    pub gender: Option<String>,
}
