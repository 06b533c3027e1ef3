//! # bookshelf-entity
//!
//! Domain entity models for Bookshelf. Every struct in this crate
//! represents a database table row or a domain value object. All entities
//! derive `Debug`, `Clone`, `Serialize`, `Deserialize`, and database
//! entities additionally derive `sqlx::FromRow`.
//!
//! JSON field names follow the public API contract (camelCase); column
//! lookups use the Rust field names.

pub mod book;
pub mod review;
pub mod user;
