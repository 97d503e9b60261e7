//! Tweet service configuration.

use common::{ConfigError, DatabaseConfig, JwtConfig, PasswordConfig};

/// Everything the services and stores need to start.
#[derive(Debug, Clone, Default)]
pub struct TweetServiceConfig {
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub password: PasswordConfig,
}

impl TweetServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database: DatabaseConfig::from_env()?,
            jwt: JwtConfig::from_env()?,
            password: PasswordConfig::from_env()?,
        })
    }
}
