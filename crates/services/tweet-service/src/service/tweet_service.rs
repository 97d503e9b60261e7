//! Tweet service - timelines, replies and likes.
//!
//! Per-user queries treat an unknown user as having no tweets rather than
//! failing. Like and unlike take the caller's session explicitly; without
//! one they return `Ok(())` and touch nothing, so callers cannot tell an
//! anonymous call apart from a successful one.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

use common::AppResult;
use domain::{CreateTweet, Session, Tweet};

use crate::repository::{LikeRepository, TweetRepository, UserRepository};

/// Tweet service trait for dependency injection.
#[async_trait]
pub trait TweetService: Send + Sync {
    /// List tweets matching `search_term`, or all tweets when it is absent or blank
    async fn get_tweets(&self, search_term: Option<&str>) -> AppResult<Vec<Tweet>>;

    /// Tweets authored by a user
    async fn get_users_tweets(&self, user_id: Uuid) -> AppResult<Vec<Tweet>>;

    /// Replies authored by a user
    async fn get_users_replies(&self, user_id: Uuid) -> AppResult<Vec<Tweet>>;

    /// Tweets a user has liked
    async fn get_users_liked_tweets(&self, user_id: Uuid) -> AppResult<Vec<Tweet>>;

    /// Get tweet by ID
    async fn get_tweet_by_id(&self, id: Uuid) -> AppResult<Option<Tweet>>;

    /// Direct replies to a tweet
    async fn get_tweet_replies(&self, tweet_id: Uuid) -> AppResult<Vec<Tweet>>;

    /// Store a new tweet. Authorship is the caller's responsibility.
    async fn create_tweet(&self, data: CreateTweet) -> AppResult<Tweet>;

    /// Like a tweet as the session user
    async fn like_tweet(&self, session: Option<&Session>, tweet_id: Uuid) -> AppResult<()>;

    /// Remove the session user's like from a tweet
    async fn unlike_tweet(&self, session: Option<&Session>, tweet_id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of TweetService using repositories.
pub struct TweetManager {
    users: Arc<dyn UserRepository>,
    tweets: Arc<dyn TweetRepository>,
    likes: Arc<dyn LikeRepository>,
}

impl TweetManager {
    /// Create new tweet service instance with repositories
    pub fn new(
        users: Arc<dyn UserRepository>,
        tweets: Arc<dyn TweetRepository>,
        likes: Arc<dyn LikeRepository>,
    ) -> Self {
        Self {
            users,
            tweets,
            likes,
        }
    }

    async fn user_exists(&self, user_id: Uuid) -> AppResult<bool> {
        let exists = self.users.find_by_id(user_id).await?.is_some();
        if !exists {
            debug!(%user_id, "Unknown user, returning no tweets");
        }
        Ok(exists)
    }
}

#[async_trait]
impl TweetService for TweetManager {
    async fn get_tweets(&self, search_term: Option<&str>) -> AppResult<Vec<Tweet>> {
        let term = search_term
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string);

        self.tweets.find(term).await
    }

    async fn get_users_tweets(&self, user_id: Uuid) -> AppResult<Vec<Tweet>> {
        if !self.user_exists(user_id).await? {
            return Ok(Vec::new());
        }

        self.tweets.find_by_author(user_id).await
    }

    async fn get_users_replies(&self, user_id: Uuid) -> AppResult<Vec<Tweet>> {
        if !self.user_exists(user_id).await? {
            return Ok(Vec::new());
        }

        self.tweets.find_replies_by_author(user_id).await
    }

    async fn get_users_liked_tweets(&self, user_id: Uuid) -> AppResult<Vec<Tweet>> {
        if !self.user_exists(user_id).await? {
            return Ok(Vec::new());
        }

        self.tweets.find_liked_by_user(user_id).await
    }

    async fn get_tweet_by_id(&self, id: Uuid) -> AppResult<Option<Tweet>> {
        self.tweets.find_by_id(id).await
    }

    async fn get_tweet_replies(&self, tweet_id: Uuid) -> AppResult<Vec<Tweet>> {
        self.tweets.find_replies_to(tweet_id).await
    }

    async fn create_tweet(&self, data: CreateTweet) -> AppResult<Tweet> {
        let tweet = self.tweets.create(data).await?;

        info!(
            tweet_id = %tweet.id,
            author_id = %tweet.author_id,
            is_reply = tweet.is_reply(),
            "Tweet created"
        );
        Ok(tweet)
    }

    async fn like_tweet(&self, session: Option<&Session>, tweet_id: Uuid) -> AppResult<()> {
        let Some(session) = session else {
            debug!(%tweet_id, "Ignoring like from anonymous caller");
            return Ok(());
        };

        self.likes.create(tweet_id, session.user_id).await
    }

    async fn unlike_tweet(&self, session: Option<&Session>, tweet_id: Uuid) -> AppResult<()> {
        let Some(session) = session else {
            debug!(%tweet_id, "Ignoring unlike from anonymous caller");
            return Ok(());
        };

        self.likes.delete(tweet_id, session.user_id).await
    }
}
