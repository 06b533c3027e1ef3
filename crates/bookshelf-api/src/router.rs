//! Route definitions for the Bookshelf HTTP API.
//!
//! All routes are organized by resource and mounted under `/api`. The
//! router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor.

use axum::{
    Router, middleware as axum_middleware,
    routing::{delete, get, post, put},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::middleware::cors::build_cors_layer;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(book_routes())
        .merge(review_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Auth endpoints: register, login, me
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/me", get(handlers::auth::me))
}

/// Book catalog endpoints
fn book_routes() -> Router<AppState> {
    Router::new()
        .route("/books", get(handlers::book::list_books))
        .route("/books", post(handlers::book::create_book))
        .route("/books/{id}", get(handlers::book::get_book))
        .route("/books/{id}", put(handlers::book::update_book))
        .route("/books/{id}", delete(handlers::book::delete_book))
}

/// Review endpoints
fn review_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/reviews/book/{bookId}",
            get(handlers::review::list_reviews_for_book),
        )
        .route(
            "/reviews/user/{userId}",
            get(handlers::review::list_reviews_for_user),
        )
        .route("/reviews", post(handlers::review::create_review))
        .route("/reviews/{id}", put(handlers::review::update_review))
        .route("/reviews/{id}", delete(handlers::review::delete_review))
}

/// Health endpoint
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
