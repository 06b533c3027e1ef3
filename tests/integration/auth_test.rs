//! Registration and login against a real database.

use axum::http::StatusCode;
use serde_json::json;
use uuid::Uuid;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_register_login_me_round_trip() {
    let Some(app) = TestApp::new().await else {
        return;
    };

    let email = format!("roundtrip-{}@example.com", Uuid::new_v4());
    let response = app.register("Alice", &email, "secret123").await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["message"], "User registered successfully");
    assert_eq!(response.body["user"]["email"], json!(email));

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({ "email": email, "password": "secret123" })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], "Login successful");

    let token = response.body["token"].as_str().expect("token").to_string();
    let response = app.request("GET", "/api/auth/me", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["user"]["email"], json!(email));
}

#[tokio::test]
async fn test_duplicate_email_is_rejected() {
    let Some(app) = TestApp::new().await else {
        return;
    };

    let email = format!("dup-{}@example.com", Uuid::new_v4());
    let first = app.register("Alice", &email, "secret123").await;
    assert_eq!(first.status, StatusCode::CREATED);

    // Same address, different case: still one account.
    let second = app
        .register("Alice Again", &email.to_uppercase(), "secret123")
        .await;
    assert_eq!(second.status, StatusCode::BAD_REQUEST);
    assert_eq!(second.body["message"], "User already exists");
}

#[tokio::test]
async fn test_login_with_wrong_password_is_generic() {
    let Some(app) = TestApp::new().await else {
        return;
    };

    let email = format!("wrongpw-{}@example.com", Uuid::new_v4());
    app.register("Alice", &email, "secret123").await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({ "email": email, "password": "not-the-password" })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "Invalid email or password");
}
