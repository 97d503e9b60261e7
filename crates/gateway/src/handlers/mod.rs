//! HTTP request handlers.

pub mod auth_handler;
pub mod health_handler;
pub mod tweet_handler;
pub mod user_handler;

pub use auth_handler::auth_routes;
pub use health_handler::health_routes;
pub use tweet_handler::tweet_routes;
pub use user_handler::user_routes;
