//! Book ownership, listing, and cascade behavior against a real database.

use axum::http::StatusCode;
use serde_json::json;
use uuid::Uuid;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_new_book_starts_with_zero_aggregate() {
    let Some(app) = TestApp::new().await else {
        return;
    };

    let (token, _) = app.register_user("Owner").await;
    let book_id = app.create_book(&token, "Fresh Book").await;

    let response = app.get_book(book_id).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["averageRating"], json!(0.0));
    assert_eq!(response.body["totalReviews"], json!(0));
    assert_eq!(response.body["addedBy"]["name"], "Owner");
}

#[tokio::test]
async fn test_search_matches_title_substring() {
    let Some(app) = TestApp::new().await else {
        return;
    };

    let (token, _) = app.register_user("Searcher").await;
    let marker = Uuid::new_v4().simple().to_string();
    app.create_book(&token, &format!("Chronicle {marker}")).await;

    let response = app
        .request("GET", &format!("/api/books?search={marker}"), None, None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["totalBooks"], json!(1));
    assert_eq!(response.body["currentPage"], json!(1));
    assert_eq!(
        response.body["books"][0]["title"],
        json!(format!("Chronicle {marker}"))
    );
}

#[tokio::test]
async fn test_non_owner_update_is_forbidden_and_changes_nothing() {
    let Some(app) = TestApp::new().await else {
        return;
    };

    let (owner_token, _) = app.register_user("Owner").await;
    let (other_token, _) = app.register_user("Intruder").await;
    let book_id = app.create_book(&owner_token, "Untouchable").await;

    let response = app
        .request(
            "PUT",
            &format!("/api/books/{book_id}"),
            Some(json!({
                "title": "Hijacked",
                "author": "Someone Else",
                "description": "An overwritten description here.",
                "genre": "Thriller",
                "publishedYear": 2001,
            })),
            Some(&other_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.body["message"], "Not authorized to update this book");

    let response = app.get_book(book_id).await;
    assert_eq!(response.body["title"], "Untouchable");
}

#[tokio::test]
async fn test_non_owner_delete_is_forbidden() {
    let Some(app) = TestApp::new().await else {
        return;
    };

    let (owner_token, _) = app.register_user("Owner").await;
    let (other_token, _) = app.register_user("Intruder").await;
    let book_id = app.create_book(&owner_token, "Still Here").await;

    let response = app
        .request(
            "DELETE",
            &format!("/api/books/{book_id}"),
            None,
            Some(&other_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.body["message"], "Not authorized to delete this book");

    assert_eq!(app.get_book(book_id).await.status, StatusCode::OK);
}

#[tokio::test]
async fn test_delete_book_removes_its_reviews() {
    let Some(app) = TestApp::new().await else {
        return;
    };

    let (owner_token, _) = app.register_user("Owner").await;
    let (reviewer_token, _) = app.register_user("Reviewer").await;
    let book_id = app.create_book(&owner_token, "Doomed Book").await;

    let review = app.create_review(&reviewer_token, book_id, 4).await;
    assert_eq!(review.status, StatusCode::CREATED);

    let response = app
        .request(
            "DELETE",
            &format!("/api/books/{book_id}"),
            None,
            Some(&owner_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body["message"],
        "Book and associated reviews deleted successfully"
    );

    assert_eq!(app.get_book(book_id).await.status, StatusCode::NOT_FOUND);

    let orphaned: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM reviews WHERE book_id = $1")
        .bind(book_id)
        .fetch_one(&app.db_pool)
        .await
        .expect("count reviews");
    assert_eq!(orphaned, 0);
}
