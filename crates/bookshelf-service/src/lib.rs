//! # bookshelf-service
//!
//! Business logic for Bookshelf. Services validate business rules,
//! enforce ownership, and orchestrate repository calls; HTTP concerns
//! stay in `bookshelf-api`.

pub mod auth;
pub mod book;
pub mod context;
pub mod review;

pub use context::RequestContext;
