//! Book entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A catalog entry describing a title, author, and metadata, owned by the
/// user who created it.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Unique book identifier.
    pub id: Uuid,
    /// Book title.
    pub title: String,
    /// Author name.
    pub author: String,
    /// Free-text description.
    pub description: String,
    /// Genre label.
    pub genre: String,
    /// Year of publication.
    pub published_year: i32,
    /// Mean of all review ratings, rounded to 1 decimal; 0 with no reviews.
    pub average_rating: f64,
    /// Number of reviews on this book.
    pub total_reviews: i32,
    /// The user who added this book (its owner).
    pub added_by: Uuid,
    /// When the book was added.
    pub created_at: DateTime<Utc>,
    /// When the book was last updated.
    pub updated_at: DateTime<Utc>,
}

/// A book joined with its creator's display name.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct BookWithCreator {
    /// Unique book identifier.
    pub id: Uuid,
    /// Book title.
    pub title: String,
    /// Author name.
    pub author: String,
    /// Free-text description.
    pub description: String,
    /// Genre label.
    pub genre: String,
    /// Year of publication.
    pub published_year: i32,
    /// Mean of all review ratings, rounded to 1 decimal; 0 with no reviews.
    pub average_rating: f64,
    /// Number of reviews on this book.
    pub total_reviews: i32,
    /// The user who added this book (its owner).
    pub added_by: Uuid,
    /// Display name of the creator.
    pub added_by_name: String,
    /// When the book was added.
    pub created_at: DateTime<Utc>,
    /// When the book was last updated.
    pub updated_at: DateTime<Utc>,
}

/// The editable fields of a book, shared by create and update.
///
/// All strings are expected to be trimmed by the time they reach the
/// persistence layer; aggregates are never part of this payload.
#[derive(Debug, Clone)]
pub struct BookFields {
    /// Book title.
    pub title: String,
    /// Author name.
    pub author: String,
    /// Free-text description.
    pub description: String,
    /// Genre label.
    pub genre: String,
    /// Year of publication.
    pub published_year: i32,
}
