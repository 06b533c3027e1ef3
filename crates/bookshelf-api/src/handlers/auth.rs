//! Auth handlers — register, login, current user.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use bookshelf_entity::user::PublicUser;

use crate::dto::request::{LoginRequest, RegisterRequest};
use crate::dto::response::{AuthResponse, UserResponse};
use crate::error::ApiResult;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<AuthResponse>)> {
    req.check()?;

    let authenticated = state
        .auth_service
        .register(&req.name, &req.email, &req.password)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            message: "User registered successfully".to_string(),
            token: authenticated.token,
            user: authenticated.user,
        }),
    ))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<AuthResponse>> {
    req.check()?;

    let authenticated = state.auth_service.login(&req.email, &req.password).await?;

    Ok(Json(AuthResponse {
        message: "Login successful".to_string(),
        token: authenticated.token,
        user: authenticated.user,
    }))
}

/// GET /api/auth/me
pub async fn me(auth: AuthUser) -> ApiResult<Json<UserResponse>> {
    Ok(Json(UserResponse {
        message: "User data retrieved successfully".to_string(),
        user: PublicUser {
            id: auth.user_id,
            name: auth.name.clone(),
            email: auth.email.clone(),
        },
    }))
}
