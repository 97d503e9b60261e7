//! User service - account creation and lookup.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use common::{AppError, AppResult};
use domain::{CreateUser, Password, User, DEFAULT_PASSWORD_HASH_COST};

use crate::repository::UserRepository;

/// User service trait for dependency injection.
///
/// Lookups report a missing user as `Ok(None)`. The only failure this
/// service raises on its own is `AppError::DuplicateUser`.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Get user by username
    async fn get_user_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// Get user by ID
    async fn get_user_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    /// Create a user, hashing the plain text password before it is stored.
    ///
    /// The returned record still carries the password hash; callers must
    /// strip it (see `domain::UserResponse`) before handing it out.
    async fn create_user(&self, data: CreateUser) -> AppResult<User>;
}

/// Concrete implementation of UserService using repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
    hash_cost: u32,
}

impl UserManager {
    /// Create new user service with the default hash cost
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self::with_hash_cost(repo, DEFAULT_PASSWORD_HASH_COST)
    }

    /// Create new user service hashing passwords with `hash_cost` iterations
    pub fn with_hash_cost(repo: Arc<dyn UserRepository>, hash_cost: u32) -> Self {
        Self { repo, hash_cost }
    }

    async fn hash_password(&self, plain_text: String) -> AppResult<String> {
        let cost = self.hash_cost;
        // Argon2 is CPU bound; keep it off the async workers
        let password = tokio::task::spawn_blocking(move || Password::with_cost(&plain_text, cost))
            .await
            .map_err(|e| AppError::internal(format!("Password hashing task failed: {}", e)))??;

        Ok(password.into_string())
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn get_user_by_username(&self, username: &str) -> AppResult<Option<User>> {
        self.repo.find_by_username(username).await
    }

    async fn get_user_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        self.repo.find_by_id(id).await
    }

    async fn create_user(&self, data: CreateUser) -> AppResult<User> {
        if self.get_user_by_username(&data.username).await?.is_some() {
            warn!(username = %data.username, "Username already taken");
            return Err(AppError::duplicate_user(data.username));
        }

        let password_hash = self.hash_password(data.password).await?;
        let user = self
            .repo
            .create(data.username, password_hash, data.name)
            .await?;

        info!(user_id = %user.id, username = %user.username, "User created");
        Ok(user)
    }
}
