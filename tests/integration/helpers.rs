//! Shared helpers for database-backed tests.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

use bookshelf_api::{AppState, build_app};
use bookshelf_core::config::{AppConfig, AuthConfig, DatabaseConfig, LoggingConfig, ServerConfig};

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Database pool for direct queries
    pub db_pool: PgPool,
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}

impl TestApp {
    /// Connects to the test database, runs migrations, and builds the app.
    ///
    /// Returns `None` when `BOOKSHELF_TEST_DATABASE_URL` is unset, which
    /// skips the calling test. Tests run in parallel against one shared
    /// database, so every fixture gets unique identifiers instead of
    /// wiping tables.
    pub async fn new() -> Option<Self> {
        let url = match std::env::var("BOOKSHELF_TEST_DATABASE_URL") {
            Ok(url) => url,
            Err(_) => {
                eprintln!("BOOKSHELF_TEST_DATABASE_URL not set; skipping");
                return None;
            }
        };

        let config = AppConfig {
            server: ServerConfig::default(),
            database: DatabaseConfig {
                url,
                max_connections: 5,
                min_connections: 0,
                connect_timeout_seconds: 5,
                idle_timeout_seconds: 60,
            },
            auth: AuthConfig::default(),
            logging: LoggingConfig::default(),
        };

        let db_pool = bookshelf_database::connection::create_pool(&config.database)
            .await
            .expect("Failed to connect to test database");

        bookshelf_database::migration::run_migrations(&db_pool)
            .await
            .expect("Failed to run migrations");

        let router = build_app(AppState::new(config, db_pool.clone()));

        Some(Self { router, db_pool })
    }

    /// Registers a fresh user with a unique email; returns their token
    /// and id.
    pub async fn register_user(&self, name: &str) -> (String, Uuid) {
        let email = format!("{}-{}@example.com", name.to_lowercase(), Uuid::new_v4());
        let response = self.register(name, &email, "secret123").await;
        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Registration failed: {:?}",
            response.body
        );

        let token = response.body["token"]
            .as_str()
            .expect("No token in register response")
            .to_string();
        let id = response.body["user"]["id"]
            .as_str()
            .and_then(|s| Uuid::parse_str(s).ok())
            .expect("No user id in register response");

        (token, id)
    }

    /// Posts a registration request verbatim.
    pub async fn register(&self, name: &str, email: &str, password: &str) -> TestResponse {
        self.request(
            "POST",
            "/api/auth/register",
            Some(json!({
                "name": name,
                "email": email,
                "password": password,
            })),
            None,
        )
        .await
    }

    /// Creates a book owned by the token's user; returns its id.
    pub async fn create_book(&self, token: &str, title: &str) -> Uuid {
        let response = self
            .request(
                "POST",
                "/api/books",
                Some(json!({
                    "title": title,
                    "author": "Iris Chen",
                    "description": "A story long enough to pass validation.",
                    "genre": "Fiction",
                    "publishedYear": 1999,
                })),
                Some(token),
            )
            .await;
        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Book creation failed: {:?}",
            response.body
        );

        response.body["id"]
            .as_str()
            .and_then(|s| Uuid::parse_str(s).ok())
            .expect("No book id in create response")
    }

    /// Posts a review of the book by the token's user; returns the
    /// response for the caller to assert on.
    pub async fn create_review(&self, token: &str, book_id: Uuid, rating: i32) -> TestResponse {
        self.request(
            "POST",
            "/api/reviews",
            Some(json!({
                "bookId": book_id.to_string(),
                "rating": rating,
                "reviewText": "Detailed enough thoughts on this one.",
            })),
            Some(token),
        )
        .await
    }

    /// Fetches a single book.
    pub async fn get_book(&self, id: Uuid) -> TestResponse {
        self.request("GET", &format!("/api/books/{id}"), None, None)
            .await
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let mut builder = Request::builder()
            .method(method)
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json");

        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }

        let body_str = body
            .map(|b| b.to_string())
            .unwrap_or_default();
        let request = builder
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");
        let body: Value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}
