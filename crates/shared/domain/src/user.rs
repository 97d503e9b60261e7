//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::password::Password;

/// User domain entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user record
    pub fn new(id: Uuid, username: String, password_hash: String, name: String) -> Self {
        Self {
            id,
            username,
            password_hash,
            name,
            created_at: Utc::now(),
        }
    }

    /// Stored password hash as a value object
    pub fn password(&self) -> Password {
        Password::from_hash(self.password_hash.as_str())
    }
}

/// User creation data transfer object
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUser {
    /// Unique handle
    pub username: String,
    /// Plain text password, hashed before it reaches storage
    pub password: String,
    /// Display name
    pub name: String,
}

/// User response (safe to return to client)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UserResponse {
    /// Unique user identifier
    pub id: Uuid,
    /// Unique handle
    pub username: String,
    /// Display name
    pub name: String,
    /// Account creation timestamp
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            name: user.name,
            created_at: user.created_at,
        }
    }
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            name: user.name.clone(),
            created_at: user.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hash_never_serialized() {
        let user = User::new(
            Uuid::new_v4(),
            "alice".to_string(),
            "$argon2id$secret".to_string(),
            "Alice".to_string(),
        );

        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains("alice"));
        assert!(!json.contains("password_hash"));
        assert!(!json.contains("$argon2id$secret"));
    }

    #[test]
    fn test_response_strips_hash() {
        let user = User::new(
            Uuid::new_v4(),
            "bob".to_string(),
            "hashed".to_string(),
            "Bob".to_string(),
        );

        let response = UserResponse::from(&user);
        assert_eq!(response.id, user.id);
        assert_eq!(response.username, "bob");
        assert_eq!(response.name, "Bob");
    }
}
