//! Gateway configuration.

use std::env;

use common::ConfigError;
use tweet_service_lib::config::TweetServiceConfig;

/// Gateway configuration.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Database, token and hashing settings for the embedded services
    pub services: TweetServiceConfig,
}

impl GatewayConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match env::var("GATEWAY_PORT") {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
                name: "GATEWAY_PORT",
                reason: format!("'{}' is not a valid port", raw),
            })?,
            Err(_) => 3000,
        };

        Ok(Self {
            host: env::var("GATEWAY_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port,
            services: TweetServiceConfig::from_env()?,
        })
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            services: TweetServiceConfig::default(),
        }
    }
}
