//! Tweet repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, RelationTrait, Select, Set,
};
use sea_orm::sea_query::{JoinType, LikeExpr};
use uuid::Uuid;

use super::entities::like;
use super::entities::tweet::{self, ActiveModel, Entity as TweetEntity};
use common::{AppError, AppResult};
use domain::{CreateTweet, Tweet};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Tweet repository trait for dependency injection.
///
/// Listings come back newest first unless noted otherwise.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait TweetRepository: Send + Sync {
    /// List tweets whose content contains `search_term`, or all tweets when `None`
    async fn find(&self, search_term: Option<String>) -> AppResult<Vec<Tweet>>;

    /// Find tweet by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Tweet>>;

    /// Tweets authored by a user (replies included)
    async fn find_by_author(&self, author_id: Uuid) -> AppResult<Vec<Tweet>>;

    /// Replies authored by a user
    async fn find_replies_by_author(&self, author_id: Uuid) -> AppResult<Vec<Tweet>>;

    /// Tweets a user has liked, most recently liked first
    async fn find_liked_by_user(&self, user_id: Uuid) -> AppResult<Vec<Tweet>>;

    /// Direct replies to a tweet, oldest first
    async fn find_replies_to(&self, tweet_id: Uuid) -> AppResult<Vec<Tweet>>;

    /// Insert a new tweet
    async fn create(&self, tweet: CreateTweet) -> AppResult<Tweet>;
}

/// Concrete implementation of TweetRepository
pub struct TweetStore {
    db: DatabaseConnection,
}

impl TweetStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

const LIKE_ESCAPE: char = '\\';

/// `%term%` with the term's own wildcard characters escaped.
fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// Newest-first listing, restricted to literal substring matches of `search_term`.
fn search_query(search_term: Option<String>) -> Select<TweetEntity> {
    let query = TweetEntity::find().order_by_desc(tweet::Column::CreatedAt);

    match search_term {
        Some(term) => {
            let pattern = LikeExpr::new(contains_pattern(&term)).escape(LIKE_ESCAPE);
            query.filter(tweet::Column::Content.like(pattern))
        }
        None => query,
    }
}

fn into_tweets(models: Vec<tweet::Model>) -> Vec<Tweet> {
    models.into_iter().map(Tweet::from).collect()
}

#[async_trait]
impl TweetRepository for TweetStore {
    async fn find(&self, search_term: Option<String>) -> AppResult<Vec<Tweet>> {
        let models = search_query(search_term)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;
        Ok(into_tweets(models))
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Tweet>> {
        let result = TweetEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Tweet::from))
    }

    async fn find_by_author(&self, author_id: Uuid) -> AppResult<Vec<Tweet>> {
        let models = TweetEntity::find()
            .filter(tweet::Column::AuthorId.eq(author_id))
            .order_by_desc(tweet::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(into_tweets(models))
    }

    async fn find_replies_by_author(&self, author_id: Uuid) -> AppResult<Vec<Tweet>> {
        let models = TweetEntity::find()
            .filter(tweet::Column::AuthorId.eq(author_id))
            .filter(tweet::Column::ReplyToId.is_not_null())
            .order_by_desc(tweet::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(into_tweets(models))
    }

    async fn find_liked_by_user(&self, user_id: Uuid) -> AppResult<Vec<Tweet>> {
        let models = TweetEntity::find()
            .join(JoinType::InnerJoin, tweet::Relation::Likes.def())
            .filter(like::Column::UserId.eq(user_id))
            .order_by_desc(like::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(into_tweets(models))
    }

    async fn find_replies_to(&self, tweet_id: Uuid) -> AppResult<Vec<Tweet>> {
        let models = TweetEntity::find()
            .filter(tweet::Column::ReplyToId.eq(tweet_id))
            .order_by_asc(tweet::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(into_tweets(models))
    }

    async fn create(&self, tweet: CreateTweet) -> AppResult<Tweet> {
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            author_id: Set(tweet.author_id),
            content: Set(tweet.content),
            reply_to_id: Set(tweet.reply_to_id),
            created_at: Set(chrono::Utc::now()),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Tweet::from(model))
    }
}
