//! Response DTOs.
//!
//! Every endpoint responds with a `message` field alongside its data.
//! Creator and reviewer references serialize as small nested objects
//! carrying the display name.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bookshelf_core::types::pagination::PageResponse;
use bookshelf_entity::book::BookWithCreator;
use bookshelf_entity::review::{Review, ReviewWithAuthor, ReviewWithBook};
use bookshelf_entity::user::PublicUser;

/// Token envelope returned by register and login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Outcome message.
    pub message: String,
    /// Signed bearer token.
    pub token: String,
    /// Public user fields.
    pub user: PublicUser,
}

/// Current-user envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// Outcome message.
    pub message: String,
    /// Public user fields.
    pub user: PublicUser,
}

/// A user reference embedded in book and review payloads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRef {
    /// User id.
    pub id: Uuid,
    /// Display name.
    pub name: String,
}

/// A book reference embedded in per-user review payloads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookRef {
    /// Book id.
    pub id: Uuid,
    /// Title.
    pub title: String,
    /// Author.
    pub author: String,
}

/// A book with its creator reference populated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookPayload {
    /// Book id.
    pub id: Uuid,
    /// Title.
    pub title: String,
    /// Author.
    pub author: String,
    /// Description.
    pub description: String,
    /// Genre.
    pub genre: String,
    /// Publication year.
    pub published_year: i32,
    /// Mean review rating, one decimal place.
    pub average_rating: f64,
    /// Number of reviews.
    pub total_reviews: i32,
    /// The user who added the book.
    pub added_by: UserRef,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl From<BookWithCreator> for BookPayload {
    fn from(book: BookWithCreator) -> Self {
        Self {
            id: book.id,
            title: book.title,
            author: book.author,
            description: book.description,
            genre: book.genre,
            published_year: book.published_year,
            average_rating: book.average_rating,
            total_reviews: book.total_reviews,
            added_by: UserRef {
                id: book.added_by,
                name: book.added_by_name,
            },
            created_at: book.created_at,
            updated_at: book.updated_at,
        }
    }
}

/// Paginated book listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookListResponse {
    /// Outcome message.
    pub message: String,
    /// Books on this page.
    pub books: Vec<BookPayload>,
    /// The requested page.
    pub current_page: u64,
    /// Total pages for this filter.
    pub total_pages: u64,
    /// Total books matching this filter.
    pub total_books: u64,
}

impl BookListResponse {
    /// Builds the listing envelope from a repository page.
    pub fn from_page(message: impl Into<String>, page: PageResponse<BookWithCreator>) -> Self {
        Self {
            message: message.into(),
            books: page.items.into_iter().map(BookPayload::from).collect(),
            current_page: page.page,
            total_pages: page.total_pages,
            total_books: page.total_items,
        }
    }
}

/// Single-book envelope; the book fields flatten to the top level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookResponse {
    /// Outcome message.
    pub message: String,
    /// The book itself.
    #[serde(flatten)]
    pub book: BookPayload,
}

/// A review with its author reference populated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewPayload {
    /// Review id.
    pub id: Uuid,
    /// Reviewed book id.
    pub book_id: Uuid,
    /// The reviewing user.
    pub user_id: UserRef,
    /// Star rating.
    pub rating: i32,
    /// Review text.
    pub review_text: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl ReviewPayload {
    /// Builds the payload from a bare review plus the author reference,
    /// used right after a write when the author is the requester.
    pub fn with_author(review: Review, author: UserRef) -> Self {
        Self {
            id: review.id,
            book_id: review.book_id,
            user_id: author,
            rating: review.rating,
            review_text: review.review_text,
            created_at: review.created_at,
            updated_at: review.updated_at,
        }
    }
}

impl From<ReviewWithAuthor> for ReviewPayload {
    fn from(review: ReviewWithAuthor) -> Self {
        Self {
            id: review.id,
            book_id: review.book_id,
            user_id: UserRef {
                id: review.user_id,
                name: review.user_name,
            },
            rating: review.rating,
            review_text: review.review_text,
            created_at: review.created_at,
            updated_at: review.updated_at,
        }
    }
}

/// A review with its book reference populated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserReviewPayload {
    /// Review id.
    pub id: Uuid,
    /// The reviewed book.
    pub book_id: BookRef,
    /// Reviewing user id.
    pub user_id: Uuid,
    /// Star rating.
    pub rating: i32,
    /// Review text.
    pub review_text: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl From<ReviewWithBook> for UserReviewPayload {
    fn from(review: ReviewWithBook) -> Self {
        Self {
            id: review.id,
            book_id: BookRef {
                id: review.book_id,
                title: review.book_title,
                author: review.book_author,
            },
            user_id: review.user_id,
            rating: review.rating,
            review_text: review.review_text,
            created_at: review.created_at,
            updated_at: review.updated_at,
        }
    }
}

/// Listing of a book's reviews.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewListResponse {
    /// Outcome message.
    pub message: String,
    /// Reviews, newest first.
    pub reviews: Vec<ReviewPayload>,
}

/// Listing of a user's reviews.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserReviewListResponse {
    /// Outcome message.
    pub message: String,
    /// Reviews, newest first.
    pub reviews: Vec<UserReviewPayload>,
}

/// Single-review envelope; the review fields flatten to the top level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewResponse {
    /// Outcome message.
    pub message: String,
    /// The review itself.
    #[serde(flatten)]
    pub review: ReviewPayload,
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
}
