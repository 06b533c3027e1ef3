//! Review operations and best-effort aggregate refresh.

use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use bookshelf_core::error::AppError;
use bookshelf_database::repositories::book::BookRepository;
use bookshelf_database::repositories::review::ReviewRepository;
use bookshelf_entity::review::{Review, ReviewFields, ReviewWithAuthor, ReviewWithBook};

use crate::context::RequestContext;
use crate::review::rating::compute_aggregate;

/// Handles review CRUD and keeps book aggregates in sync.
#[derive(Debug, Clone)]
pub struct ReviewService {
    /// Review repository.
    review_repo: Arc<ReviewRepository>,
    /// Book repository, for existence checks and aggregate writes.
    book_repo: Arc<BookRepository>,
}

impl ReviewService {
    /// Creates a new review service.
    pub fn new(review_repo: Arc<ReviewRepository>, book_repo: Arc<BookRepository>) -> Self {
        Self {
            review_repo,
            book_repo,
        }
    }

    /// Lists all reviews for a book, reviewer names populated, newest
    /// first. An unknown book simply has no reviews.
    pub async fn list_for_book(&self, book_id: Uuid) -> Result<Vec<ReviewWithAuthor>, AppError> {
        self.review_repo.find_by_book(book_id).await
    }

    /// Lists all reviews by a user, book title/author populated, newest
    /// first.
    pub async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<ReviewWithBook>, AppError> {
        self.review_repo.find_by_user(user_id).await
    }

    /// Creates a review on a book, at most one per (user, book) pair, then
    /// refreshes the book's aggregate.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        book_id: Uuid,
        fields: &ReviewFields,
    ) -> Result<Review, AppError> {
        self.book_repo
            .find_by_id(book_id)
            .await?
            .ok_or_else(|| AppError::not_found("Book not found"))?;

        // Read-then-write check; the unique index catches the race.
        if self
            .review_repo
            .find_by_book_and_user(book_id, ctx.user_id)
            .await?
            .is_some()
        {
            return Err(AppError::conflict("You have already reviewed this book"));
        }

        let review = self.review_repo.create(book_id, ctx.user_id, fields).await?;

        info!(review_id = %review.id, book_id = %book_id, user_id = %ctx.user_id, "Review created");

        self.refresh_book_aggregate(book_id).await;

        Ok(review)
    }

    /// Updates a review's rating and text. Only the author may update.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        fields: &ReviewFields,
    ) -> Result<Review, AppError> {
        let review = self
            .review_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Review not found"))?;

        if review.user_id != ctx.user_id {
            return Err(AppError::forbidden("Not authorized to update this review"));
        }

        let review = self.review_repo.update(id, fields).await?;

        info!(review_id = %review.id, user_id = %ctx.user_id, "Review updated");

        self.refresh_book_aggregate(review.book_id).await;

        Ok(review)
    }

    /// Deletes a review. Only the author may delete.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> Result<(), AppError> {
        let review = self
            .review_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Review not found"))?;

        if review.user_id != ctx.user_id {
            return Err(AppError::forbidden("Not authorized to delete this review"));
        }

        self.review_repo.delete(id).await?;

        info!(review_id = %id, user_id = %ctx.user_id, "Review deleted");

        self.refresh_book_aggregate(review.book_id).await;

        Ok(())
    }

    /// Recomputes a book's aggregate from the full current review set and
    /// writes it as an absolute value.
    ///
    /// A failure here is logged and never fails the triggering request;
    /// the next review write on the book will recompute from scratch.
    async fn refresh_book_aggregate(&self, book_id: Uuid) {
        let result = async {
            let ratings = self.review_repo.ratings_for_book(book_id).await?;
            let (average_rating, total_reviews) = compute_aggregate(&ratings);
            self.book_repo
                .update_aggregate(book_id, average_rating, total_reviews)
                .await
        }
        .await;

        if let Err(e) = result {
            warn!(book_id = %book_id, error = %e, "Failed to refresh book rating aggregate");
        }
    }
}
