//! Tweet Service Library
//!
//! Users, tweets and likes on top of PostgreSQL. The gateway embeds this
//! crate in-process; it can also be driven directly for migrations.

pub mod config;
pub mod infra;
pub mod repository;
pub mod service;

use std::sync::Arc;

use tracing::info;

use crate::config::TweetServiceConfig;
use crate::infra::Database;
use crate::repository::{LikeStore, TweetStore, UserStore};
use crate::service::{
    AuthService, Authenticator, TweetManager, TweetService, UserManager, UserService,
};

/// Service handles wired to one database pool.
#[derive(Clone)]
pub struct Services {
    pub auth: Arc<dyn AuthService>,
    pub users: Arc<dyn UserService>,
    pub tweets: Arc<dyn TweetService>,
}

impl Services {
    /// Build stores and services sharing the connection pool of `db`.
    pub fn new(db: &Database, config: &TweetServiceConfig) -> Self {
        let conn = db.get_connection();

        let user_repo = Arc::new(UserStore::new(conn.clone()));
        let tweet_repo = Arc::new(TweetStore::new(conn.clone()));
        let like_repo = Arc::new(LikeStore::new(conn));

        Self {
            auth: Arc::new(Authenticator::new(user_repo.clone(), config.jwt.clone())),
            users: Arc::new(UserManager::with_hash_cost(
                user_repo.clone(),
                config.password.hash_cost,
            )),
            tweets: Arc::new(TweetManager::new(user_repo, tweet_repo, like_repo)),
        }
    }
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(
    config: &TweetServiceConfig,
    action: MigrateAction,
) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::connect_without_migrations(&config.database).await?;

    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            info!("Migrations applied successfully");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            let status = db.migration_status().await?;
            for (name, applied) in status {
                let marker = if applied { "[x]" } else { "[ ]" };
                println!("{} {}", marker, name);
            }
        }
        MigrateAction::Fresh => {
            db.fresh_migrations().await?;
            info!("Database reset and migrations applied");
        }
    }

    Ok(())
}

/// Migration action type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}
