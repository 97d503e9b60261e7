//! Like repository implementation.

use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use super::entities::like::{self, ActiveModel, Entity as LikeEntity};
use common::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Like association repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait LikeRepository: Send + Sync {
    /// Record that `user_id` likes `tweet_id`
    async fn create(&self, tweet_id: Uuid, user_id: Uuid) -> AppResult<()>;

    /// Remove the like, if any
    async fn delete(&self, tweet_id: Uuid, user_id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of LikeRepository
pub struct LikeStore {
    db: DatabaseConnection,
}

impl LikeStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl LikeRepository for LikeStore {
    async fn create(&self, tweet_id: Uuid, user_id: Uuid) -> AppResult<()> {
        let active_model = ActiveModel {
            tweet_id: Set(tweet_id),
            user_id: Set(user_id),
            created_at: Set(chrono::Utc::now()),
        };

        // Liking twice keeps a single row
        let inserted = LikeEntity::insert(active_model)
            .on_conflict(
                OnConflict::columns([like::Column::TweetId, like::Column::UserId])
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .map_err(AppError::from)?;

        if inserted == 0 {
            tracing::debug!(%tweet_id, %user_id, "Like already present");
        }

        Ok(())
    }

    async fn delete(&self, tweet_id: Uuid, user_id: Uuid) -> AppResult<()> {
        let result = LikeEntity::delete_many()
            .filter(like::Column::TweetId.eq(tweet_id))
            .filter(like::Column::UserId.eq(user_id))
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            tracing::debug!(%tweet_id, %user_id, "No like to remove");
        }

        Ok(())
    }
}
