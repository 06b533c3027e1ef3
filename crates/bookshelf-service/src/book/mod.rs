//! Book catalog service.

pub mod service;

pub use service::{BookListQuery, BookService};
