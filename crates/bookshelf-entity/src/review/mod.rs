//! Review domain entities.

pub mod model;

pub use model::{Review, ReviewFields, ReviewWithAuthor, ReviewWithBook};
