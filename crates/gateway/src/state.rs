//! Application state for dependency injection.

use std::sync::Arc;

use tweet_service_lib::infra::Database;
use tweet_service_lib::service::{AuthService, TweetService, UserService};
use tweet_service_lib::Services;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthService>,
    pub user_service: Arc<dyn UserService>,
    pub tweet_service: Arc<dyn TweetService>,
    /// Absent when the services are not backed by a database (tests).
    pub database: Option<Database>,
}

impl AppState {
    /// Create new app state.
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        user_service: Arc<dyn UserService>,
        tweet_service: Arc<dyn TweetService>,
    ) -> Self {
        Self {
            auth_service,
            user_service,
            tweet_service,
            database: None,
        }
    }

    /// Create app state from services wired to `database`.
    pub fn from_services(services: Services, database: Database) -> Self {
        Self {
            auth_service: services.auth,
            user_service: services.users,
            tweet_service: services.tweets,
            database: Some(database),
        }
    }
}
