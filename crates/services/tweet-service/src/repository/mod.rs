//! Repository layer for data access.

pub mod entities;
mod like_repository;
mod tweet_repository;
mod user_repository;

pub use like_repository::{LikeRepository, LikeStore};
pub use tweet_repository::{TweetRepository, TweetStore};
pub use user_repository::{UserRepository, UserStore};

#[cfg(any(test, feature = "test-utils"))]
pub use like_repository::MockLikeRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use tweet_repository::MockTweetRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
