//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use bookshelf_auth::jwt::decoder::JwtDecoder;
use bookshelf_auth::jwt::encoder::JwtEncoder;
use bookshelf_auth::password::PasswordHasher;
use bookshelf_core::config::AppConfig;

use bookshelf_database::repositories::book::BookRepository;
use bookshelf_database::repositories::review::ReviewRepository;
use bookshelf_database::repositories::user::UserRepository;

use bookshelf_service::auth::AuthService;
use bookshelf_service::book::BookService;
use bookshelf_service::review::ReviewService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool
    pub db_pool: PgPool,

    /// JWT token encoder
    pub jwt_encoder: Arc<JwtEncoder>,
    /// JWT token decoder and validator
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Password hasher (Argon2)
    pub password_hasher: Arc<PasswordHasher>,

    /// User repository
    pub user_repo: Arc<UserRepository>,
    /// Book repository
    pub book_repo: Arc<BookRepository>,
    /// Review repository
    pub review_repo: Arc<ReviewRepository>,

    /// Registration/login service
    pub auth_service: Arc<AuthService>,
    /// Book catalog service
    pub book_service: Arc<BookService>,
    /// Review and rating service
    pub review_service: Arc<ReviewService>,
}

impl AppState {
    /// Wires the full dependency graph from a configuration and a pool.
    pub fn new(config: AppConfig, db_pool: PgPool) -> Self {
        let user_repo = Arc::new(UserRepository::new(db_pool.clone()));
        let book_repo = Arc::new(BookRepository::new(db_pool.clone()));
        let review_repo = Arc::new(ReviewRepository::new(db_pool.clone()));

        let password_hasher = Arc::new(PasswordHasher::new());
        let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
        let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));

        let auth_service = Arc::new(AuthService::new(
            Arc::clone(&user_repo),
            Arc::clone(&password_hasher),
            Arc::clone(&jwt_encoder),
        ));
        let book_service = Arc::new(BookService::new(Arc::clone(&book_repo)));
        let review_service = Arc::new(ReviewService::new(
            Arc::clone(&review_repo),
            Arc::clone(&book_repo),
        ));

        Self {
            config: Arc::new(config),
            db_pool,
            jwt_encoder,
            jwt_decoder,
            password_hasher,
            user_repo,
            book_repo,
            review_repo,
            auth_service,
            book_service,
            review_service,
        }
    }
}
