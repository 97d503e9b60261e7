use std::sync::Arc;

use tokio_test::{assert_err, assert_ok};

use common::{AppError, JwtConfig};
use domain::{CreateUser, Session, TOKEN_TYPE_BEARER};

use super::test_support::MemoryStore;
use super::{AuthService, Authenticator, UserManager, UserService};
use crate::repository::MockUserRepository;

fn jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test-secret-key-that-is-long-enough-for-hs256".to_string(),
        expiration_hours: 1,
    }
}

async fn store_with_alice() -> Arc<MemoryStore> {
    let store = Arc::new(MemoryStore::default());
    let users = UserManager::with_hash_cost(store.clone(), 1);
    let data = CreateUser {
        username: "alice".to_string(),
        password: "p1".to_string(),
        name: "Alice".to_string(),
    };
    assert_ok!(users.create_user(data).await);
    store
}

#[tokio::test]
async fn test_login_issues_verifiable_token() {
    let store = store_with_alice().await;
    let auth = Authenticator::new(store.clone(), jwt_config());

    let token = assert_ok!(auth.login("alice".to_string(), "p1".to_string()).await);
    assert_eq!(token.token_type, TOKEN_TYPE_BEARER);
    assert_eq!(token.expires_in, 3600);

    let claims = assert_ok!(auth.verify_token(&token.access_token));
    assert_eq!(claims.username, "alice");
    assert!(claims.exp > claims.iat);

    let session = Session::from(claims);
    assert_eq!(session.username, "alice");
}

#[tokio::test]
async fn test_login_wrong_password_rejected() {
    let store = store_with_alice().await;
    let auth = Authenticator::new(store, jwt_config());

    let err = assert_err!(auth.login("alice".to_string(), "p2".to_string()).await);
    assert!(matches!(err, AppError::InvalidCredentials));
}

#[tokio::test]
async fn test_login_unknown_user_rejected() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_username().times(1).returning(|_| Ok(None));

    let auth = Authenticator::new(Arc::new(repo), jwt_config());

    let err = assert_err!(auth.login("ghost".to_string(), "p1".to_string()).await);
    assert!(matches!(err, AppError::InvalidCredentials));
}

#[tokio::test]
async fn test_token_signed_with_other_secret_rejected() {
    let store = store_with_alice().await;
    let issuer = Authenticator::new(store.clone(), jwt_config());
    let token = assert_ok!(issuer.login("alice".to_string(), "p1".to_string()).await);

    let other = Authenticator::new(
        store,
        JwtConfig {
            secret: "a-completely-different-secret-of-enough-length".to_string(),
            expiration_hours: 1,
        },
    );

    let err = assert_err!(other.verify_token(&token.access_token));
    assert!(matches!(err, AppError::Jwt(_)));
}

#[tokio::test]
async fn test_out_of_range_expiration_fails_without_panicking() {
    let store = store_with_alice().await;
    let auth = Authenticator::new(
        store,
        JwtConfig {
            expiration_hours: i64::MAX / 1000,
            ..jwt_config()
        },
    );

    let err = assert_err!(auth.login("alice".to_string(), "p1".to_string()).await);
    assert!(matches!(err, AppError::Internal(_)));
}

#[test]
fn test_garbage_token_rejected() {
    let auth = Authenticator::new(Arc::new(MockUserRepository::new()), jwt_config());

    assert!(auth.verify_token("not.a.jwt").is_err());
}
