//! Repository implementations, one per entity.

pub mod book;
pub mod review;
pub mod user;

pub use book::BookRepository;
pub use review::ReviewRepository;
pub use user::UserRepository;
