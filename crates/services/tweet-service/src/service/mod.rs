//! Service layer business logic.

mod auth_service;
mod tweet_service;
mod user_service;

pub use auth_service::{AuthService, Authenticator, Claims, TokenResponse};
pub use tweet_service::{TweetManager, TweetService};
pub use user_service::{UserManager, UserService};

#[cfg(test)]
mod test_support;
#[cfg(test)]
mod auth_service_tests;
#[cfg(test)]
mod user_service_tests;
