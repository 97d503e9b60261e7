//! OpenAPI documentation.

use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};

use crate::handlers::auth_handler::{LoginRequest, RegisterRequest, TokenResponse};
use crate::handlers::tweet_handler::CreateTweetRequest;
use domain::{Tweet, UserResponse};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::auth_handler::register,
        crate::handlers::auth_handler::login,
        crate::handlers::user_handler::get_user_by_username,
        crate::handlers::user_handler::get_user,
        crate::handlers::user_handler::get_users_tweets,
        crate::handlers::user_handler::get_users_replies,
        crate::handlers::user_handler::get_users_liked_tweets,
        crate::handlers::tweet_handler::list_tweets,
        crate::handlers::tweet_handler::create_tweet,
        crate::handlers::tweet_handler::get_tweet,
        crate::handlers::tweet_handler::get_tweet_replies,
        crate::handlers::tweet_handler::like_tweet,
        crate::handlers::tweet_handler::unlike_tweet,
    ),
    components(
        schemas(
            RegisterRequest,
            LoginRequest,
            TokenResponse,
            UserResponse,
            Tweet,
            CreateTweetRequest,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Registration and login"),
        (name = "Users", description = "User profiles and per-user timelines"),
        (name = "Tweets", description = "Tweets, replies and likes"),
    )
)]
pub struct ApiDoc;

/// Security scheme modifier.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
