//! Book handlers — listing, lookup, and owner-gated mutation.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;

use crate::dto::request::BookRequest;
use crate::dto::response::{BookListResponse, BookResponse, MessageResponse};
use crate::error::ApiResult;
use crate::extractors::path::parse_id;
use crate::extractors::{AuthUser, BookListParams};
use crate::state::AppState;

/// GET /api/books
pub async fn list_books(
    State(state): State<AppState>,
    Query(params): Query<BookListParams>,
) -> ApiResult<Json<BookListResponse>> {
    let page = state.book_service.list(&params.into_query()).await?;

    Ok(Json(BookListResponse::from_page(
        "Books retrieved successfully",
        page,
    )))
}

/// GET /api/books/{id}
pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<BookResponse>> {
    let id = parse_id(&id, "Book not found")?;
    let book = state.book_service.get(id).await?;

    Ok(Json(BookResponse {
        message: "Book retrieved successfully".to_string(),
        book: book.into(),
    }))
}

/// POST /api/books
pub async fn create_book(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<BookRequest>,
) -> ApiResult<(StatusCode, Json<BookResponse>)> {
    let fields = req.into_fields()?;
    let book = state.book_service.create(&auth, &fields).await?;

    Ok((
        StatusCode::CREATED,
        Json(BookResponse {
            message: "Book created successfully".to_string(),
            book: book.into(),
        }),
    ))
}

/// PUT /api/books/{id}
pub async fn update_book(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    Json(req): Json<BookRequest>,
) -> ApiResult<Json<BookResponse>> {
    let fields = req.into_fields()?;
    let id = parse_id(&id, "Book not found")?;
    let book = state.book_service.update(&auth, id, &fields).await?;

    Ok(Json(BookResponse {
        message: "Book updated successfully".to_string(),
        book: book.into(),
    }))
}

/// DELETE /api/books/{id}
pub async fn delete_book(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    let id = parse_id(&id, "Book not found")?;
    state.book_service.delete(&auth, id).await?;

    Ok(Json(MessageResponse {
        message: "Book and associated reviews deleted successfully".to_string(),
    }))
}
