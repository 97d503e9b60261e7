use std::sync::Arc;

use mockall::predicate::eq;
use tokio_test::{assert_err, assert_ok};
use uuid::Uuid;

use common::AppError;
use domain::{CreateUser, Password, User};

use super::test_support::MemoryStore;
use super::{UserManager, UserService};
use crate::repository::MockUserRepository;

fn create_test_user(username: &str) -> User {
    User::new(
        Uuid::new_v4(),
        username.to_string(),
        "hashed".to_string(),
        "Test User".to_string(),
    )
}

fn signup(username: &str, password: &str) -> CreateUser {
    CreateUser {
        username: username.to_string(),
        password: password.to_string(),
        name: "Alice".to_string(),
    }
}

#[tokio::test]
async fn test_get_user_by_id_found() {
    let user = create_test_user("alice");
    let id = user.id;

    let mut repo = MockUserRepository::new();
    repo.expect_find_by_id()
        .with(eq(id))
        .times(1)
        .returning(move |_| Ok(Some(user.clone())));

    let service = UserManager::new(Arc::new(repo));
    let found = assert_ok!(service.get_user_by_id(id).await);

    assert_eq!(found.map(|u| u.username), Some("alice".to_string()));
}

#[tokio::test]
async fn test_get_user_by_id_missing_is_none() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_id().returning(|_| Ok(None));

    let service = UserManager::new(Arc::new(repo));
    let found = assert_ok!(service.get_user_by_id(Uuid::new_v4()).await);

    assert!(found.is_none());
}

#[tokio::test]
async fn test_get_user_by_username_missing_is_none() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_username().returning(|_| Ok(None));

    let service = UserManager::new(Arc::new(repo));
    let found = assert_ok!(service.get_user_by_username("nobody").await);

    assert!(found.is_none());
}

#[tokio::test]
async fn test_create_user_hashes_password() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_username().times(1).returning(|_| Ok(None));
    repo.expect_create()
        .withf(|username, password_hash, name| {
            username == "alice"
                && name == "Alice"
                && password_hash != "p1"
                && Password::from_hash(password_hash.as_str()).verify("p1")
        })
        .times(1)
        .returning(|username, password_hash, name| {
            Ok(User::new(Uuid::new_v4(), username, password_hash, name))
        });

    let service = UserManager::with_hash_cost(Arc::new(repo), 1);
    let user = assert_ok!(service.create_user(signup("alice", "p1")).await);

    assert_eq!(user.username, "alice");
    assert!(user.password().verify("p1"));
}

#[tokio::test]
async fn test_create_user_duplicate_never_inserts() {
    let existing = create_test_user("alice");

    let mut repo = MockUserRepository::new();
    repo.expect_find_by_username()
        .times(1)
        .returning(move |_| Ok(Some(existing.clone())));
    repo.expect_create().never();

    let service = UserManager::new(Arc::new(repo));
    let err = assert_err!(service.create_user(signup("alice", "p2")).await);

    assert!(matches!(err, AppError::DuplicateUser(ref name) if name == "alice"));
}

#[tokio::test]
async fn test_create_user_lost_race_is_duplicate() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_username().returning(|_| Ok(None));
    repo.expect_create()
        .times(1)
        .returning(|username, _, _| Err(AppError::duplicate_user(username)));

    let service = UserManager::with_hash_cost(Arc::new(repo), 1);
    let err = assert_err!(service.create_user(signup("alice", "p1")).await);

    assert!(err.is_duplicate_user());
}

#[tokio::test]
async fn test_signup_then_lookup_and_second_signup_rejected() {
    let store = Arc::new(MemoryStore::default());
    let service = UserManager::with_hash_cost(store.clone(), 1);

    assert_ok!(service.create_user(signup("alice", "p1")).await);

    let alice = assert_ok!(service.get_user_by_username("alice").await)
        .expect("alice should exist");
    assert_eq!(alice.name, "Alice");
    assert!(alice.password().verify("p1"));

    let by_id = assert_ok!(service.get_user_by_id(alice.id).await);
    assert_eq!(by_id.map(|u| u.id), Some(alice.id));

    let err = assert_err!(service.create_user(signup("alice", "p2")).await);
    assert!(err.is_duplicate_user());
    assert_eq!(store.user_count(), 1);

    // The first password still verifies after the rejected signup
    let alice = assert_ok!(service.get_user_by_username("alice").await)
        .expect("alice should exist");
    assert!(alice.password().verify("p1"));
    assert!(!alice.password().verify("p2"));
}
