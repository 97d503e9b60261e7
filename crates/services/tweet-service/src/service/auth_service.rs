//! Authentication service - login and session tokens.
//!
//! Tokens are HS256 JWTs. A verified token is the only way the gateway
//! obtains a `Session`.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use common::{AppError, AppResult, JwtConfig};
use domain::{Session, User, SECONDS_PER_HOUR, TOKEN_TYPE_BEARER};

use crate::repository::UserRepository;

/// Verifies against this when the username is unknown, so both failure
/// paths do the same amount of hashing work.
const DUMMY_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$ZHVtbXlzYWx0MTIzNDU2$Ctz7u1H0wvZJ0F5N1JbP4SSkN0Xx4VQ0sJ8i1pT2a0M";

/// JWT claims payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub username: String,
    pub exp: i64,
    pub iat: i64,
}

impl From<Claims> for Session {
    fn from(claims: Claims) -> Self {
        Session::new(claims.sub, claims.username)
    }
}

/// Token response returned after successful authentication
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    /// JWT access token
    pub access_token: String,
    /// Token type (always "Bearer")
    pub token_type: String,
    /// Token expiration time in seconds
    pub expires_in: i64,
}

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Check credentials and issue a token
    async fn login(&self, username: String, password: String) -> AppResult<TokenResponse>;

    /// Verify JWT token and extract claims
    fn verify_token(&self, token: &str) -> AppResult<Claims>;
}

/// Concrete implementation of AuthService backed by the user repository.
pub struct Authenticator {
    users: Arc<dyn UserRepository>,
    jwt: JwtConfig,
}

impl Authenticator {
    /// Create new auth service instance
    pub fn new(users: Arc<dyn UserRepository>, jwt: JwtConfig) -> Self {
        Self { users, jwt }
    }

    /// Generate JWT token for a user
    fn generate_token(&self, user: &User) -> AppResult<TokenResponse> {
        let lifetime = Duration::try_hours(self.jwt.expiration_hours)
            .ok_or_else(|| AppError::internal("JWT expiration is out of range"))?;
        let expires_in = self
            .jwt
            .expiration_hours
            .checked_mul(SECONDS_PER_HOUR)
            .ok_or_else(|| AppError::internal("JWT expiration is out of range"))?;

        let now = Utc::now();
        let expires_at = now
            .checked_add_signed(lifetime)
            .ok_or_else(|| AppError::internal("JWT expiration is out of range"))?;

        let claims = Claims {
            sub: user.id,
            username: user.username.clone(),
            exp: expires_at.timestamp(),
            iat: now.timestamp(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt.secret.as_bytes()),
        )?;

        Ok(TokenResponse {
            access_token: token,
            token_type: TOKEN_TYPE_BEARER.to_string(),
            expires_in,
        })
    }
}

#[async_trait]
impl AuthService for Authenticator {
    async fn login(&self, username: String, password: String) -> AppResult<TokenResponse> {
        let user = self.users.find_by_username(&username).await?;

        let stored_hash = user
            .as_ref()
            .map_or(DUMMY_HASH.to_string(), |u| u.password_hash.clone());
        let password_valid = tokio::task::spawn_blocking(move || {
            domain::Password::from_hash(stored_hash).verify(&password)
        })
        .await
        .map_err(|e| AppError::internal(format!("Password verification task failed: {}", e)))?;

        match user {
            Some(user) if password_valid => {
                info!(user_id = %user.id, "User logged in");
                self.generate_token(&user)
            }
            _ => Err(AppError::InvalidCredentials),
        }
    }

    fn verify_token(&self, token: &str) -> AppResult<Claims> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.jwt.secret.as_bytes()),
            &Validation::default(),
        )?;

        Ok(token_data.claims)
    }
}
