//! User roles.
//!
//! Roles are persisted as a SMALLINT (`users.role`). The set is closed: any
//! other stored value is a data error, not a third role.

use serde::Serialize;

/// Stored code for an ordinary shopper.
pub const ROLE_CODE_MEMBER: i16 = 0;
/// Stored code for a catalog / order administrator.
pub const ROLE_CODE_ADMINISTRATOR: i16 = 1;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    Member,
    Administrator,
}

impl Role {
    /// Decode a stored role code. Returns `None` for unknown codes.
    pub fn from_code(code: i16) -> Option<Self> {
        match code {
            ROLE_CODE_MEMBER => Some(Role::Member),
            ROLE_CODE_ADMINISTRATOR => Some(Role::Administrator),
            _ => None,
        }
    }

    pub fn code(self) -> i16 {
        match self {
            Role::Member => ROLE_CODE_MEMBER,
            Role::Administrator => ROLE_CODE_ADMINISTRATOR,
        }
    }
}
