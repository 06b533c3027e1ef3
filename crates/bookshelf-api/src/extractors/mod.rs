//! Request extractors.

pub mod auth;
pub mod path;
pub mod query;

pub use auth::AuthUser;
pub use query::BookListParams;
