//! Book catalog operations — listing, lookup, and owner-gated mutation.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use bookshelf_core::error::AppError;
use bookshelf_core::types::pagination::{PageRequest, PageResponse};
use bookshelf_core::types::sorting::SortDirection;
use bookshelf_database::repositories::book::BookRepository;
use bookshelf_entity::book::{Book, BookFields, BookWithCreator};

use crate::context::RequestContext;

/// Query parameters for the book listing.
#[derive(Debug, Clone)]
pub struct BookListQuery {
    /// Case-insensitive substring matched against title OR author.
    pub search: String,
    /// Case-insensitive substring matched against genre.
    pub genre: String,
    /// Book field to sort by (whitelisted at the repository).
    pub sort_by: String,
    /// Sort direction.
    pub direction: SortDirection,
    /// Page number and size.
    pub page: PageRequest,
}

/// Handles book catalog operations.
#[derive(Debug, Clone)]
pub struct BookService {
    /// Book repository.
    book_repo: Arc<BookRepository>,
}

impl BookService {
    /// Creates a new book service.
    pub fn new(book_repo: Arc<BookRepository>) -> Self {
        Self { book_repo }
    }

    /// Lists books matching the query, creator names populated.
    ///
    /// A page past the end returns an empty list, not an error.
    pub async fn list(
        &self,
        query: &BookListQuery,
    ) -> Result<PageResponse<BookWithCreator>, AppError> {
        self.book_repo
            .list(
                &query.search,
                &query.genre,
                &query.sort_by,
                query.direction,
                &query.page,
            )
            .await
    }

    /// Fetches a single book, creator name populated.
    pub async fn get(&self, id: Uuid) -> Result<BookWithCreator, AppError> {
        self.book_repo
            .find_by_id_with_creator(id)
            .await?
            .ok_or_else(|| AppError::not_found("Book not found"))
    }

    /// Creates a book owned by the requesting user.
    ///
    /// Aggregates start at zero; fields arrive validated and trimmed from
    /// the API boundary.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        fields: &BookFields,
    ) -> Result<BookWithCreator, AppError> {
        let book = self.book_repo.create(ctx.user_id, fields).await?;

        info!(book_id = %book.id, user_id = %ctx.user_id, "Book created");

        self.with_creator(book).await
    }

    /// Replaces a book's editable fields. Only the owner may update;
    /// aggregates are untouched.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        fields: &BookFields,
    ) -> Result<BookWithCreator, AppError> {
        let book = self
            .book_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Book not found"))?;

        if book.added_by != ctx.user_id {
            return Err(AppError::forbidden("Not authorized to update this book"));
        }

        let book = self.book_repo.update(id, fields).await?;

        info!(book_id = %book.id, user_id = %ctx.user_id, "Book updated");

        self.with_creator(book).await
    }

    /// Deletes a book and all its reviews. Only the owner may delete.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> Result<(), AppError> {
        let book = self
            .book_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Book not found"))?;

        if book.added_by != ctx.user_id {
            return Err(AppError::forbidden("Not authorized to delete this book"));
        }

        self.book_repo.delete_with_reviews(id).await?;

        info!(book_id = %id, user_id = %ctx.user_id, "Book and its reviews deleted");

        Ok(())
    }

    /// Re-reads a freshly written book with its creator name populated.
    async fn with_creator(&self, book: Book) -> Result<BookWithCreator, AppError> {
        self.book_repo
            .find_by_id_with_creator(book.id)
            .await?
            .ok_or_else(|| AppError::not_found("Book not found"))
    }
}
