//! Review uniqueness, authorship, and rating aggregation against a real
//! database.

use axum::http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_reviews_drive_the_book_aggregate() {
    let Some(app) = TestApp::new().await else {
        return;
    };

    let (owner_token, _) = app.register_user("Owner").await;
    let (first_token, _) = app.register_user("First").await;
    let (second_token, _) = app.register_user("Second").await;
    let book_id = app.create_book(&owner_token, "Rated Book").await;

    let response = app.create_review(&first_token, book_id, 5).await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["message"], "Review created successfully");
    assert_eq!(response.body["userId"]["name"], "First");

    let book = app.get_book(book_id).await;
    assert_eq!(book.body["averageRating"], json!(5.0));
    assert_eq!(book.body["totalReviews"], json!(1));

    app.create_review(&second_token, book_id, 4).await;

    let book = app.get_book(book_id).await;
    assert_eq!(book.body["averageRating"], json!(4.5));
    assert_eq!(book.body["totalReviews"], json!(2));
}

#[tokio::test]
async fn test_second_review_by_same_user_is_rejected() {
    let Some(app) = TestApp::new().await else {
        return;
    };

    let (owner_token, _) = app.register_user("Owner").await;
    let (reviewer_token, _) = app.register_user("Reviewer").await;
    let book_id = app.create_book(&owner_token, "Once Only").await;

    let first = app.create_review(&reviewer_token, book_id, 5).await;
    assert_eq!(first.status, StatusCode::CREATED);

    let second = app.create_review(&reviewer_token, book_id, 1).await;
    assert_eq!(second.status, StatusCode::BAD_REQUEST);
    assert_eq!(second.body["message"], "You have already reviewed this book");

    // The duplicate must not have touched the aggregate.
    let book = app.get_book(book_id).await;
    assert_eq!(book.body["averageRating"], json!(5.0));
    assert_eq!(book.body["totalReviews"], json!(1));
}

#[tokio::test]
async fn test_update_review_recomputes_the_aggregate() {
    let Some(app) = TestApp::new().await else {
        return;
    };

    let (owner_token, _) = app.register_user("Owner").await;
    let (reviewer_token, _) = app.register_user("Reviewer").await;
    let book_id = app.create_book(&owner_token, "Reconsidered").await;

    let review = app.create_review(&reviewer_token, book_id, 5).await;
    let review_id = review.body["id"].as_str().expect("review id").to_string();

    let response = app
        .request(
            "PUT",
            &format!("/api/reviews/{review_id}"),
            Some(json!({
                "rating": 3,
                "reviewText": "On reflection, merely decent.",
            })),
            Some(&reviewer_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], "Review updated successfully");

    let book = app.get_book(book_id).await;
    assert_eq!(book.body["averageRating"], json!(3.0));
    assert_eq!(book.body["totalReviews"], json!(1));
}

#[tokio::test]
async fn test_delete_review_reverts_the_aggregate() {
    let Some(app) = TestApp::new().await else {
        return;
    };

    let (owner_token, _) = app.register_user("Owner").await;
    let (first_token, _) = app.register_user("First").await;
    let (second_token, _) = app.register_user("Second").await;
    let book_id = app.create_book(&owner_token, "Shrinking").await;

    app.create_review(&first_token, book_id, 5).await;
    let second = app.create_review(&second_token, book_id, 3).await;
    let second_id = second.body["id"].as_str().expect("review id").to_string();

    let book = app.get_book(book_id).await;
    assert_eq!(book.body["averageRating"], json!(4.0));

    let response = app
        .request(
            "DELETE",
            &format!("/api/reviews/{second_id}"),
            None,
            Some(&second_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], "Review deleted successfully");

    let book = app.get_book(book_id).await;
    assert_eq!(book.body["averageRating"], json!(5.0));
    assert_eq!(book.body["totalReviews"], json!(1));
}

#[tokio::test]
async fn test_non_author_mutation_is_forbidden_and_changes_nothing() {
    let Some(app) = TestApp::new().await else {
        return;
    };

    let (owner_token, _) = app.register_user("Owner").await;
    let (author_token, _) = app.register_user("Author").await;
    let (other_token, _) = app.register_user("Intruder").await;
    let book_id = app.create_book(&owner_token, "Contested").await;

    let review = app.create_review(&author_token, book_id, 5).await;
    let review_id = review.body["id"].as_str().expect("review id").to_string();

    let response = app
        .request(
            "PUT",
            &format!("/api/reviews/{review_id}"),
            Some(json!({
                "rating": 1,
                "reviewText": "Vandalized review text here.",
            })),
            Some(&other_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(
        response.body["message"],
        "Not authorized to update this review"
    );

    let response = app
        .request(
            "DELETE",
            &format!("/api/reviews/{review_id}"),
            None,
            Some(&other_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(
        response.body["message"],
        "Not authorized to delete this review"
    );

    let reviews = app
        .request("GET", &format!("/api/reviews/book/{book_id}"), None, None)
        .await;
    assert_eq!(reviews.body["reviews"][0]["rating"], json!(5));
    assert_eq!(reviews.body["reviews"][0]["userId"]["name"], "Author");
}
