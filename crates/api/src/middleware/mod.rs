//! Authorization gate extractors.
//!
//! - [`auth::AuthUser`] -- stage 1: a valid session token is present.
//! - [`rbac::RequireAdmin`] -- stage 2: the token's user is an administrator.

pub mod auth;
pub mod rbac;
