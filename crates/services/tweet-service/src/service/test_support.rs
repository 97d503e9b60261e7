//! In-memory stores for exercising services end to end without a database.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use common::{AppError, AppResult};
use domain::{CreateTweet, Like, Tweet, User};

use crate::repository::{LikeRepository, TweetRepository, UserRepository};

/// Users, tweets and likes kept in insertion order.
#[derive(Default)]
pub struct MemoryStore {
    users: Mutex<Vec<User>>,
    tweets: Mutex<Vec<Tweet>>,
    likes: Mutex<Vec<Like>>,
}

impl MemoryStore {
    pub fn like_count(&self) -> usize {
        self.likes.lock().unwrap().len()
    }

    pub fn user_count(&self) -> usize {
        self.users.lock().unwrap().len()
    }

    fn tweets_where(&self, keep: impl Fn(&Tweet) -> bool) -> Vec<Tweet> {
        let tweets = self.tweets.lock().unwrap();
        tweets.iter().rev().filter(|t| keep(t)).cloned().collect()
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.username == username).cloned())
    }

    async fn create(
        &self,
        username: String,
        password_hash: String,
        name: String,
    ) -> AppResult<User> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.username == username) {
            return Err(AppError::duplicate_user(username));
        }
        let user = User::new(Uuid::new_v4(), username, password_hash, name);
        users.push(user.clone());
        Ok(user)
    }
}

#[async_trait]
impl TweetRepository for MemoryStore {
    async fn find(&self, search_term: Option<String>) -> AppResult<Vec<Tweet>> {
        Ok(self.tweets_where(|t| match &search_term {
            Some(term) => t.content.contains(term.as_str()),
            None => true,
        }))
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Tweet>> {
        let tweets = self.tweets.lock().unwrap();
        Ok(tweets.iter().find(|t| t.id == id).cloned())
    }

    async fn find_by_author(&self, author_id: Uuid) -> AppResult<Vec<Tweet>> {
        Ok(self.tweets_where(|t| t.author_id == author_id))
    }

    async fn find_replies_by_author(&self, author_id: Uuid) -> AppResult<Vec<Tweet>> {
        Ok(self.tweets_where(|t| t.author_id == author_id && t.is_reply()))
    }

    async fn find_liked_by_user(&self, user_id: Uuid) -> AppResult<Vec<Tweet>> {
        let likes = self.likes.lock().unwrap();
        let tweets = self.tweets.lock().unwrap();
        Ok(likes
            .iter()
            .rev()
            .filter(|l| l.user_id == user_id)
            .filter_map(|l| tweets.iter().find(|t| t.id == l.tweet_id).cloned())
            .collect())
    }

    async fn find_replies_to(&self, tweet_id: Uuid) -> AppResult<Vec<Tweet>> {
        let tweets = self.tweets.lock().unwrap();
        Ok(tweets.iter().filter(|t| t.replies_to(tweet_id)).cloned().collect())
    }

    async fn create(&self, data: CreateTweet) -> AppResult<Tweet> {
        let tweet = Tweet {
            id: Uuid::new_v4(),
            author_id: data.author_id,
            content: data.content,
            reply_to_id: data.reply_to_id,
            created_at: Utc::now(),
        };
        self.tweets.lock().unwrap().push(tweet.clone());
        Ok(tweet)
    }
}

#[async_trait]
impl LikeRepository for MemoryStore {
    async fn create(&self, tweet_id: Uuid, user_id: Uuid) -> AppResult<()> {
        let like = Like::new(tweet_id, user_id);
        let mut likes = self.likes.lock().unwrap();
        if !likes.contains(&like) {
            likes.push(like);
        }
        Ok(())
    }

    async fn delete(&self, tweet_id: Uuid, user_id: Uuid) -> AppResult<()> {
        let like = Like::new(tweet_id, user_id);
        self.likes.lock().unwrap().retain(|l| *l != like);
        Ok(())
    }
}
