//! Domain rules for the ShopShare backend.
//!
//! Everything in this crate is pure: no database, no HTTP. The `db` and `api`
//! crates build on these types and validators.

pub mod account;
pub mod cart;
pub mod catalog;
pub mod error;
pub mod roles;
pub mod types;
pub mod uploads;
pub mod validation;
