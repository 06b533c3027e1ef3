//! Review handlers — per-book and per-user listings plus author-gated
//! mutation.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use crate::dto::request::{CreateReviewRequest, UpdateReviewRequest};
use crate::dto::response::{
    MessageResponse, ReviewListResponse, ReviewPayload, ReviewResponse, UserRef,
    UserReviewListResponse,
};
use crate::error::ApiResult;
use crate::extractors::AuthUser;
use crate::extractors::path::parse_id;
use crate::state::AppState;

/// GET /api/reviews/book/{bookId}
pub async fn list_reviews_for_book(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
) -> ApiResult<Json<ReviewListResponse>> {
    let book_id = parse_id(&book_id, "Book not found")?;
    let reviews = state.review_service.list_for_book(book_id).await?;

    Ok(Json(ReviewListResponse {
        message: "Reviews retrieved successfully".to_string(),
        reviews: reviews.into_iter().map(ReviewPayload::from).collect(),
    }))
}

/// GET /api/reviews/user/{userId}
pub async fn list_reviews_for_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<UserReviewListResponse>> {
    let user_id = parse_id(&user_id, "User not found")?;
    let reviews = state.review_service.list_for_user(user_id).await?;

    Ok(Json(UserReviewListResponse {
        message: "User reviews retrieved successfully".to_string(),
        reviews: reviews.into_iter().map(Into::into).collect(),
    }))
}

/// POST /api/reviews
pub async fn create_review(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateReviewRequest>,
) -> ApiResult<(StatusCode, Json<ReviewResponse>)> {
    let (book_id, fields) = req.into_parts()?;
    let review = state.review_service.create(&auth, book_id, &fields).await?;

    let author = UserRef {
        id: auth.user_id,
        name: auth.name.clone(),
    };

    Ok((
        StatusCode::CREATED,
        Json(ReviewResponse {
            message: "Review created successfully".to_string(),
            review: ReviewPayload::with_author(review, author),
        }),
    ))
}

/// PUT /api/reviews/{id}
pub async fn update_review(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    Json(req): Json<UpdateReviewRequest>,
) -> ApiResult<Json<ReviewResponse>> {
    let fields = req.into_fields()?;
    let id = parse_id(&id, "Review not found")?;
    let review = state.review_service.update(&auth, id, &fields).await?;

    let author = UserRef {
        id: auth.user_id,
        name: auth.name.clone(),
    };

    Ok(Json(ReviewResponse {
        message: "Review updated successfully".to_string(),
        review: ReviewPayload::with_author(review, author),
    }))
}

/// DELETE /api/reviews/{id}
pub async fn delete_review(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    let id = parse_id(&id, "Review not found")?;
    state.review_service.delete(&auth, id).await?;

    Ok(Json(MessageResponse {
        message: "Review deleted successfully".to_string(),
    }))
}
