//! Review entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A star rating and free text authored by a user for a book.
///
/// At most one review exists per (user, book) pair; the database enforces
/// this with a unique index.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    /// Unique review identifier.
    pub id: Uuid,
    /// The reviewed book.
    pub book_id: Uuid,
    /// The review author (its owner).
    pub user_id: Uuid,
    /// Star rating, 1 through 5.
    pub rating: i32,
    /// Review text, at least 10 characters.
    pub review_text: String,
    /// When the review was posted.
    pub created_at: DateTime<Utc>,
    /// When the review was last updated.
    pub updated_at: DateTime<Utc>,
}

/// A review joined with its author's display name.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ReviewWithAuthor {
    /// Unique review identifier.
    pub id: Uuid,
    /// The reviewed book.
    pub book_id: Uuid,
    /// The review author.
    pub user_id: Uuid,
    /// Display name of the author.
    pub user_name: String,
    /// Star rating, 1 through 5.
    pub rating: i32,
    /// Review text.
    pub review_text: String,
    /// When the review was posted.
    pub created_at: DateTime<Utc>,
    /// When the review was last updated.
    pub updated_at: DateTime<Utc>,
}

/// A review joined with the title and author of its book.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ReviewWithBook {
    /// Unique review identifier.
    pub id: Uuid,
    /// The reviewed book.
    pub book_id: Uuid,
    /// The review author.
    pub user_id: Uuid,
    /// Title of the reviewed book.
    pub book_title: String,
    /// Author of the reviewed book.
    pub book_author: String,
    /// Star rating, 1 through 5.
    pub rating: i32,
    /// Review text.
    pub review_text: String,
    /// When the review was posted.
    pub created_at: DateTime<Utc>,
    /// When the review was last updated.
    pub updated_at: DateTime<Utc>,
}

/// The editable fields of a review.
#[derive(Debug, Clone)]
pub struct ReviewFields {
    /// Star rating, 1 through 5.
    pub rating: i32,
    /// Review text (trimmed).
    pub review_text: String,
}
