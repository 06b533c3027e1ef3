//! Review service and rating aggregation.

pub mod rating;
pub mod service;

pub use service::ReviewService;
