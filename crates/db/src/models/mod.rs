//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - Create / update DTOs consumed by the repositories
//! - Joined read models returned by list queries

pub mod cart_item;
pub mod product;
pub mod user;
