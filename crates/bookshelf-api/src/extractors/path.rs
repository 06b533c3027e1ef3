//! Path id parsing.

use uuid::Uuid;

use bookshelf_core::error::AppError;

/// Parses a path segment as a UUID.
///
/// A malformed id can never name an existing resource, so it reports
/// with the same not-found message as an unknown one.
pub fn parse_id(raw: &str, not_found_message: &'static str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::not_found(not_found_message))
}
