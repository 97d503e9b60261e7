//! Tweet and like entities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Tweet domain entity. A tweet with `reply_to_id` set is a reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Tweet {
    /// Unique tweet identifier
    pub id: Uuid,
    /// Author's user id
    pub author_id: Uuid,
    /// Tweet text
    pub content: String,
    /// Tweet this one replies to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to_id: Option<Uuid>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Tweet {
    /// Check if this tweet is a reply to another tweet
    pub fn is_reply(&self) -> bool {
        self.reply_to_id.is_some()
    }

    /// Check if this tweet replies to `tweet_id`
    pub fn replies_to(&self, tweet_id: Uuid) -> bool {
        self.reply_to_id == Some(tweet_id)
    }
}

/// Tweet creation data transfer object
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreateTweet {
    pub author_id: Uuid,
    pub content: String,
    pub reply_to_id: Option<Uuid>,
}

/// "Liked by" association between a user and a tweet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Like {
    pub tweet_id: Uuid,
    pub user_id: Uuid,
}

impl Like {
    pub fn new(tweet_id: Uuid, user_id: Uuid) -> Self {
        Self { tweet_id, user_id }
    }
}
