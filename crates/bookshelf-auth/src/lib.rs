//! # bookshelf-auth
//!
//! Authentication primitives for Bookshelf.
//!
//! ## Modules
//!
//! - `jwt` — JWT token creation and validation (HS256, stateless)
//! - `password` — Argon2id password hashing and verification

pub mod jwt;
pub mod password;

pub use jwt::{Claims, JwtDecoder, JwtEncoder};
pub use password::PasswordHasher;
