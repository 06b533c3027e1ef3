//! Review repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use bookshelf_core::error::{AppError, ErrorKind};
use bookshelf_core::result::AppResult;
use bookshelf_entity::review::{Review, ReviewFields, ReviewWithAuthor, ReviewWithBook};

/// Repository for review CRUD and query operations.
#[derive(Debug, Clone)]
pub struct ReviewRepository {
    pool: PgPool,
}

impl ReviewRepository {
    /// Create a new review repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a review by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Review>> {
        sqlx::query_as::<_, Review>("SELECT * FROM reviews WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find review by id", e)
            })
    }

    /// Find a user's review of a specific book, if any.
    pub async fn find_by_book_and_user(
        &self,
        book_id: Uuid,
        user_id: Uuid,
    ) -> AppResult<Option<Review>> {
        sqlx::query_as::<_, Review>("SELECT * FROM reviews WHERE book_id = $1 AND user_id = $2")
            .bind(book_id)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find review for user", e)
            })
    }

    /// List all reviews for a book, reviewer name populated, newest first.
    pub async fn find_by_book(&self, book_id: Uuid) -> AppResult<Vec<ReviewWithAuthor>> {
        sqlx::query_as::<_, ReviewWithAuthor>(
            "SELECT r.*, u.name AS user_name FROM reviews r \
             JOIN users u ON u.id = r.user_id \
             WHERE r.book_id = $1 ORDER BY r.created_at DESC",
        )
        .bind(book_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list reviews for book", e)
        })
    }

    /// List all reviews by a user, book title/author populated, newest first.
    pub async fn find_by_user(&self, user_id: Uuid) -> AppResult<Vec<ReviewWithBook>> {
        sqlx::query_as::<_, ReviewWithBook>(
            "SELECT r.*, b.title AS book_title, b.author AS book_author FROM reviews r \
             JOIN books b ON b.id = r.book_id \
             WHERE r.user_id = $1 ORDER BY r.created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list reviews for user", e)
        })
    }

    /// All ratings currently on a book, for aggregate recomputation.
    pub async fn ratings_for_book(&self, book_id: Uuid) -> AppResult<Vec<i32>> {
        sqlx::query_scalar::<_, i32>("SELECT rating FROM reviews WHERE book_id = $1")
            .bind(book_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to fetch ratings", e))
    }

    /// Create a new review.
    ///
    /// A concurrent duplicate is caught by the unique index on
    /// `(book_id, user_id)` and reported as a conflict.
    pub async fn create(
        &self,
        book_id: Uuid,
        user_id: Uuid,
        fields: &ReviewFields,
    ) -> AppResult<Review> {
        sqlx::query_as::<_, Review>(
            "INSERT INTO reviews (book_id, user_id, rating, review_text) \
             VALUES ($1, $2, $3, $4) \
             RETURNING *",
        )
        .bind(book_id)
        .bind(user_id)
        .bind(fields.rating)
        .bind(&fields.review_text)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("reviews_book_user_key") =>
            {
                AppError::conflict("You have already reviewed this book")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create review", e),
        })
    }

    /// Update a review's rating and text.
    pub async fn update(&self, id: Uuid, fields: &ReviewFields) -> AppResult<Review> {
        sqlx::query_as::<_, Review>(
            "UPDATE reviews SET rating = $2, review_text = $3, updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(fields.rating)
        .bind(&fields.review_text)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update review", e))?
        .ok_or_else(|| AppError::not_found("Review not found"))
    }

    /// Delete a review by ID.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM reviews WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete review", e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}
