//! Request DTOs with validation.
//!
//! Validation is collect-all: every violated rule is gathered into a
//! single `Validation` error before anything touches the database.
//! Body fields use `#[serde(default)]` so a missing field reports as
//! "<field> is required" instead of a deserialization failure.

use chrono::Datelike;
use serde::Deserialize;
use uuid::Uuid;
use validator::{Validate, ValidationError, ValidationErrors};

use bookshelf_core::error::AppError;
use bookshelf_entity::book::BookFields;
use bookshelf_entity::review::ReviewFields;

/// Registration request body.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Display name.
    #[serde(default)]
    #[validate(custom(function = validate_name))]
    pub name: String,
    /// Email address.
    #[serde(default)]
    #[validate(custom(function = validate_email))]
    pub email: String,
    /// Plain-text password.
    #[serde(default)]
    #[validate(custom(function = validate_password))]
    pub password: String,
}

impl RegisterRequest {
    /// Runs all field checks, collecting every violation.
    pub fn check(&self) -> Result<(), AppError> {
        into_app_error(self.validate(), &["name", "email", "password"])
    }
}

/// Login request body.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email address.
    #[serde(default)]
    #[validate(custom(function = validate_email))]
    pub email: String,
    /// Plain-text password.
    #[serde(default)]
    #[validate(custom(function = validate_password_present))]
    pub password: String,
}

impl LoginRequest {
    /// Runs all field checks, collecting every violation.
    pub fn check(&self) -> Result<(), AppError> {
        into_app_error(self.validate(), &["email", "password"])
    }
}

/// Book create/update request body. Both operations take the full set
/// of editable fields.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BookRequest {
    /// Title.
    #[serde(default)]
    #[validate(custom(function = validate_title))]
    pub title: String,
    /// Author.
    #[serde(default)]
    #[validate(custom(function = validate_author))]
    pub author: String,
    /// Description.
    #[serde(default)]
    #[validate(custom(function = validate_description))]
    pub description: String,
    /// Genre.
    #[serde(default)]
    #[validate(custom(function = validate_genre))]
    pub genre: String,
    /// Publication year.
    pub published_year: Option<i32>,
}

impl BookRequest {
    /// Validates every field and converts into trimmed storage fields.
    pub fn into_fields(self) -> Result<BookFields, AppError> {
        let mut errors = collect_messages(
            self.validate(),
            &["title", "author", "description", "genre"],
        );

        match self.published_year {
            None => errors.push("publishedYear is required".to_string()),
            Some(year) if !valid_published_year(year) => {
                errors.push("Please enter a valid published year".to_string());
            }
            Some(_) => {}
        }

        if !errors.is_empty() {
            return Err(AppError::validation_errors(errors));
        }

        Ok(BookFields {
            title: self.title.trim().to_string(),
            author: self.author.trim().to_string(),
            description: self.description.trim().to_string(),
            genre: self.genre.trim().to_string(),
            published_year: self.published_year.unwrap_or_default(),
        })
    }
}

/// Review creation request body. The target book travels in the body,
/// not the path.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewRequest {
    /// Target book id.
    #[serde(default)]
    #[validate(custom(function = validate_book_id_present))]
    pub book_id: String,
    /// Star rating, 1 through 5.
    pub rating: Option<i32>,
    /// Review body text.
    #[serde(default)]
    #[validate(custom(function = validate_review_text))]
    pub review_text: String,
}

impl CreateReviewRequest {
    /// Validates every field and splits into the target book id and the
    /// trimmed review fields.
    ///
    /// A well-formed request whose book id is not a UUID can never match
    /// a book, so it reports as the book not being found.
    pub fn into_parts(self) -> Result<(Uuid, ReviewFields), AppError> {
        let mut errors = collect_messages(self.validate(), &["bookId", "reviewText"]);
        push_rating_errors(self.rating, &mut errors);

        if !errors.is_empty() {
            return Err(AppError::validation_errors(errors));
        }

        let book_id = Uuid::parse_str(self.book_id.trim())
            .map_err(|_| AppError::not_found("Book not found"))?;

        Ok((
            book_id,
            ReviewFields {
                rating: self.rating.unwrap_or_default(),
                review_text: self.review_text.trim().to_string(),
            },
        ))
    }
}

/// Review update request body.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReviewRequest {
    /// Star rating, 1 through 5.
    pub rating: Option<i32>,
    /// Review body text.
    #[serde(default)]
    #[validate(custom(function = validate_review_text))]
    pub review_text: String,
}

impl UpdateReviewRequest {
    /// Validates every field and converts into trimmed review fields.
    pub fn into_fields(self) -> Result<ReviewFields, AppError> {
        let mut errors = collect_messages(self.validate(), &["reviewText"]);
        push_rating_errors(self.rating, &mut errors);

        if !errors.is_empty() {
            return Err(AppError::validation_errors(errors));
        }

        Ok(ReviewFields {
            rating: self.rating.unwrap_or_default(),
            review_text: self.review_text.trim().to_string(),
        })
    }
}

// ── Field rules ──────────────────────────────────────────────

fn failure(message: &'static str) -> ValidationError {
    let mut err = ValidationError::new("invalid");
    err.message = Some(message.into());
    err
}

fn validate_name(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(failure("name is required"));
    }
    if value.trim().chars().count() < 2 {
        return Err(failure("Name must be at least 2 characters"));
    }
    Ok(())
}

fn validate_email(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(failure("email is required"));
    }
    if !is_valid_email(value) {
        return Err(failure("Please enter a valid email"));
    }
    Ok(())
}

fn validate_password(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(failure("password is required"));
    }
    if value.chars().count() < 6 {
        return Err(failure("Password must be at least 6 characters"));
    }
    Ok(())
}

/// Login only requires the password to be present; its length was
/// enforced at registration time.
fn validate_password_present(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(failure("password is required"));
    }
    Ok(())
}

fn validate_title(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(failure("title is required"));
    }
    Ok(())
}

fn validate_author(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(failure("author is required"));
    }
    Ok(())
}

fn validate_genre(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(failure("genre is required"));
    }
    Ok(())
}

fn validate_description(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(failure("description is required"));
    }
    if value.trim().chars().count() < 10 {
        return Err(failure("Description must be at least 10 characters"));
    }
    Ok(())
}

fn validate_review_text(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(failure("reviewText is required"));
    }
    if value.trim().chars().count() < 10 {
        return Err(failure("Review must be at least 10 characters"));
    }
    Ok(())
}

fn validate_book_id_present(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(failure("bookId is required"));
    }
    Ok(())
}

fn push_rating_errors(rating: Option<i32>, errors: &mut Vec<String>) {
    match rating {
        None => errors.push("rating is required".to_string()),
        Some(r) if !(1..=5).contains(&r) => {
            errors.push("Rating must be between 1 and 5".to_string());
        }
        Some(_) => {}
    }
}

/// Shape check equivalent to `^[^\s@]+@[^\s@]+\.[^\s@]+$`.
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty()
                && domain
                    .rsplit_once('.')
                    .is_some_and(|(head, tail)| !head.is_empty() && !tail.is_empty())
        }
        _ => false,
    }
}

/// Years below 1000 or beyond next year are rejected.
fn valid_published_year(year: i32) -> bool {
    let max = chrono::Utc::now().year() + 1;
    (1000..=max).contains(&year)
}

// ── Error collection ─────────────────────────────────────────

/// Flattens derive-produced errors into reference-order messages.
///
/// Field keys are tried in both the wire spelling and the struct field
/// spelling, since the derive reports whichever it knows about.
fn collect_messages(result: Result<(), ValidationErrors>, field_order: &[&str]) -> Vec<String> {
    let Err(errors) = result else {
        return Vec::new();
    };

    let fields = errors.field_errors();
    let mut messages = Vec::new();
    for &field in field_order {
        let snake = to_snake_case(field);
        let Some(errs) = fields.get(field).or_else(|| fields.get(snake.as_str())) else {
            continue;
        };
        for err in errs.iter() {
            match &err.message {
                Some(msg) => messages.push(msg.to_string()),
                None => messages.push(format!("{field} is invalid")),
            }
        }
    }
    messages
}

fn to_snake_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len() + 2);
    for c in field.chars() {
        if c.is_ascii_uppercase() {
            out.push('_');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

fn into_app_error(result: Result<(), ValidationErrors>, field_order: &[&str]) -> Result<(), AppError> {
    let messages = collect_messages(result, field_order);
    if messages.is_empty() {
        Ok(())
    } else {
        Err(AppError::validation_errors(messages))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register(name: &str, email: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_register_collects_all_failures() {
        let err = register("", "", "").check().unwrap_err();
        let details = err.details.unwrap();
        assert_eq!(
            details,
            vec!["name is required", "email is required", "password is required"]
        );
    }

    #[test]
    fn test_register_rejects_short_name() {
        let err = register("A", "a@example.com", "secret1").check().unwrap_err();
        assert_eq!(err.details.unwrap(), vec!["Name must be at least 2 characters"]);
    }

    #[test]
    fn test_register_rejects_malformed_email() {
        let err = register("Alice", "not-an-email", "secret1")
            .check()
            .unwrap_err();
        assert_eq!(err.details.unwrap(), vec!["Please enter a valid email"]);
    }

    #[test]
    fn test_register_rejects_short_password() {
        let err = register("Alice", "a@example.com", "short").check().unwrap_err();
        assert_eq!(
            err.details.unwrap(),
            vec!["Password must be at least 6 characters"]
        );
    }

    #[test]
    fn test_register_accepts_valid_input() {
        assert!(register("Alice", "a@example.com", "secret1").check().is_ok());
    }

    #[test]
    fn test_login_does_not_enforce_password_length() {
        let req = LoginRequest {
            email: "a@example.com".to_string(),
            password: "abc".to_string(),
        };
        assert!(req.check().is_ok());
    }

    #[test]
    fn test_email_shape() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@sub.example.com"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a@.co"));
        assert!(!is_valid_email("a b@c.co"));
        assert!(!is_valid_email("a@b@c.co"));
        assert!(!is_valid_email(" a@b.co"));
    }

    fn book(year: Option<i32>) -> BookRequest {
        BookRequest {
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            description: "A sprawling desert epic.".to_string(),
            genre: "Science Fiction".to_string(),
            published_year: year,
        }
    }

    #[test]
    fn test_book_trims_fields() {
        let mut req = book(Some(1965));
        req.title = "  Dune  ".to_string();
        let fields = req.into_fields().unwrap();
        assert_eq!(fields.title, "Dune");
        assert_eq!(fields.published_year, 1965);
    }

    #[test]
    fn test_book_rejects_missing_year() {
        let err = book(None).into_fields().unwrap_err();
        assert_eq!(err.details.unwrap(), vec!["publishedYear is required"]);
    }

    #[test]
    fn test_book_rejects_out_of_range_year() {
        let err = book(Some(999)).into_fields().unwrap_err();
        assert_eq!(
            err.details.unwrap(),
            vec!["Please enter a valid published year"]
        );

        let next_year = chrono::Utc::now().year() + 1;
        assert!(book(Some(next_year)).into_fields().is_ok());
        assert!(book(Some(next_year + 1)).into_fields().is_err());
    }

    #[test]
    fn test_book_rejects_short_description() {
        let mut req = book(Some(1965));
        req.description = "too short".to_string();
        let err = req.into_fields().unwrap_err();
        assert_eq!(
            err.details.unwrap(),
            vec!["Description must be at least 10 characters"]
        );
    }

    #[test]
    fn test_review_rejects_rating_out_of_bounds() {
        let req = CreateReviewRequest {
            book_id: Uuid::new_v4().to_string(),
            rating: Some(6),
            review_text: "An excellent, memorable read.".to_string(),
        };
        let err = req.into_parts().unwrap_err();
        assert_eq!(err.details.unwrap(), vec!["Rating must be between 1 and 5"]);
    }

    #[test]
    fn test_review_requires_all_fields() {
        let req = CreateReviewRequest {
            book_id: String::new(),
            rating: None,
            review_text: String::new(),
        };
        let err = req.into_parts().unwrap_err();
        assert_eq!(
            err.details.unwrap(),
            vec!["bookId is required", "reviewText is required", "rating is required"]
        );
    }

    #[test]
    fn test_review_unparseable_book_id_is_not_found() {
        let req = CreateReviewRequest {
            book_id: "not-a-uuid".to_string(),
            rating: Some(4),
            review_text: "An excellent, memorable read.".to_string(),
        };
        let err = req.into_parts().unwrap_err();
        assert_eq!(err.message, "Book not found");
    }
}
