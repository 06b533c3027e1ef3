//! Book repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use bookshelf_core::error::{AppError, ErrorKind};
use bookshelf_core::result::AppResult;
use bookshelf_core::types::pagination::{PageRequest, PageResponse};
use bookshelf_core::types::sorting::SortDirection;
use bookshelf_entity::book::{Book, BookFields, BookWithCreator};

/// Select list joining each book with its creator's name.
const SELECT_WITH_CREATOR: &str =
    "SELECT b.*, u.name AS added_by_name FROM books b JOIN users u ON u.id = b.added_by";

/// Repository for book CRUD and query operations.
#[derive(Debug, Clone)]
pub struct BookRepository {
    pool: PgPool,
}

impl BookRepository {
    /// Create a new book repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a book by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Book>> {
        sqlx::query_as::<_, Book>("SELECT * FROM books WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find book by id", e))
    }

    /// Find a book by primary key, creator name populated.
    pub async fn find_by_id_with_creator(&self, id: Uuid) -> AppResult<Option<BookWithCreator>> {
        sqlx::query_as::<_, BookWithCreator>(&format!("{SELECT_WITH_CREATOR} WHERE b.id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find book by id", e))
    }

    /// List books with search, genre filter, sorting, and pagination.
    ///
    /// `search` matches case-insensitively as a substring of title OR
    /// author; `genre` matches case-insensitively as a substring of genre.
    /// Empty filters match every row.
    pub async fn list(
        &self,
        search: &str,
        genre: &str,
        sort_by: &str,
        direction: SortDirection,
        page: &PageRequest,
    ) -> AppResult<PageResponse<BookWithCreator>> {
        let search_pattern = format!("%{}%", escape_like(search));
        let genre_pattern = format!("%{}%", escape_like(genre));
        let filter = "(b.title ILIKE $1 OR b.author ILIKE $1) AND b.genre ILIKE $2";

        let total: i64 = sqlx::query_scalar(&format!(
            "SELECT COUNT(*) FROM books b WHERE {filter}"
        ))
        .bind(&search_pattern)
        .bind(&genre_pattern)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count books", e))?;

        let order_column = sort_column(sort_by);
        let order_dir = direction.as_sql();

        let books = sqlx::query_as::<_, BookWithCreator>(&format!(
            "{SELECT_WITH_CREATOR} WHERE {filter} \
             ORDER BY b.{order_column} {order_dir} LIMIT $3 OFFSET $4"
        ))
        .bind(&search_pattern)
        .bind(&genre_pattern)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list books", e))?;

        Ok(PageResponse::new(
            books,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Create a new book with zeroed aggregates.
    pub async fn create(&self, added_by: Uuid, fields: &BookFields) -> AppResult<Book> {
        sqlx::query_as::<_, Book>(
            "INSERT INTO books (title, author, description, genre, published_year, added_by) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING *",
        )
        .bind(&fields.title)
        .bind(&fields.author)
        .bind(&fields.description)
        .bind(&fields.genre)
        .bind(fields.published_year)
        .bind(added_by)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create book", e))
    }

    /// Replace a book's editable fields; aggregates are untouched.
    pub async fn update(&self, id: Uuid, fields: &BookFields) -> AppResult<Book> {
        sqlx::query_as::<_, Book>(
            "UPDATE books SET title = $2, author = $3, description = $4, genre = $5, \
                              published_year = $6, updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&fields.title)
        .bind(&fields.author)
        .bind(&fields.description)
        .bind(&fields.genre)
        .bind(fields.published_year)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update book", e))?
        .ok_or_else(|| AppError::not_found("Book not found"))
    }

    /// Delete a book together with all its reviews, in one transaction.
    pub async fn delete_with_reviews(&self, id: Uuid) -> AppResult<bool> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        sqlx::query("DELETE FROM reviews WHERE book_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete book reviews", e)
            })?;

        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete book", e))?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit transaction", e)
        })?;

        Ok(result.rows_affected() > 0)
    }

    /// Write the recomputed aggregate onto a book as an absolute value.
    pub async fn update_aggregate(
        &self,
        id: Uuid,
        average_rating: f64,
        total_reviews: i32,
    ) -> AppResult<()> {
        sqlx::query(
            "UPDATE books SET average_rating = $2, total_reviews = $3, updated_at = NOW() \
             WHERE id = $1",
        )
        .bind(id)
        .bind(average_rating)
        .bind(total_reviews)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update book aggregate", e)
        })?;
        Ok(())
    }
}

/// Escape LIKE metacharacters so filter text matches literally.
fn escape_like(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Map an API sort field to a real column. Unknown fields fall back to
/// `created_at`, the list endpoint's default.
fn sort_column(sort_by: &str) -> &'static str {
    match sort_by {
        "title" => "title",
        "author" => "author",
        "genre" => "genre",
        "description" => "description",
        "publishedYear" | "published_year" => "published_year",
        "averageRating" | "average_rating" => "average_rating",
        "totalReviews" | "total_reviews" => "total_reviews",
        _ => "created_at",
    }
}
