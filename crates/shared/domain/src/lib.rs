//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! Users, tweets, likes and sessions are shared by the tweet service and
//! the HTTP gateway.

pub mod constants;
pub mod error;
pub mod password;
pub mod session;
pub mod tweet;
pub mod user;

pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use password::Password;
pub use session::Session;
pub use tweet::{CreateTweet, Like, Tweet};
pub use user::{CreateUser, User, UserResponse};
