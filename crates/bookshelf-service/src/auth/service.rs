//! Registration, login, and token-to-user resolution.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use bookshelf_auth::jwt::encoder::JwtEncoder;
use bookshelf_auth::password::PasswordHasher;
use bookshelf_core::error::AppError;
use bookshelf_database::repositories::user::UserRepository;
use bookshelf_entity::user::{CreateUser, PublicUser, User};

/// A freshly authenticated user together with their signed token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    /// Signed bearer token (subject = user id).
    pub token: String,
    /// Public user fields.
    pub user: PublicUser,
}

/// Handles registration, login, and current-user resolution.
#[derive(Debug, Clone)]
pub struct AuthService {
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// JWT token encoder.
    jwt_encoder: Arc<JwtEncoder>,
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        hasher: Arc<PasswordHasher>,
        jwt_encoder: Arc<JwtEncoder>,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            jwt_encoder,
        }
    }

    /// Registers a new user.
    ///
    /// Field validation has already happened at the API boundary; this
    /// method enforces email uniqueness (case-folded) and persists the
    /// hashed credential. A concurrent duplicate registration is caught by
    /// the storage layer and surfaces as the same conflict.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthenticatedUser, AppError> {
        let email = email.trim().to_lowercase();

        if self.user_repo.find_by_email(&email).await?.is_some() {
            return Err(AppError::conflict("User already exists"));
        }

        let password_hash = self.hasher.hash_password(password)?;

        let user = self
            .user_repo
            .create(&CreateUser {
                name: name.trim().to_string(),
                email,
                password_hash,
            })
            .await?;

        info!(user_id = %user.id, "User registered");

        let token = self.jwt_encoder.generate_token(user.id)?;
        Ok(AuthenticatedUser {
            token,
            user: user.public(),
        })
    }

    /// Logs a user in with email and password.
    ///
    /// An unknown email and a wrong password produce the same generic
    /// error, deliberately not revealing which one failed.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthenticatedUser, AppError> {
        let user = self
            .user_repo
            .find_by_email(email.trim())
            .await?
            .ok_or_else(AppError::invalid_credentials)?;

        let valid = self.hasher.verify_password(password, &user.password_hash)?;
        if !valid {
            return Err(AppError::invalid_credentials());
        }

        info!(user_id = %user.id, "User logged in");

        let token = self.jwt_encoder.generate_token(user.id)?;
        Ok(AuthenticatedUser {
            token,
            user: user.public(),
        })
    }

    /// Resolves a verified token subject to a live user record.
    ///
    /// A valid token whose user has since disappeared is treated as
    /// unauthorized, not as a missing resource.
    pub async fn resolve_user(&self, user_id: Uuid) -> Result<User, AppError> {
        self.user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::unauthorized("User no longer exists"))
    }
}
