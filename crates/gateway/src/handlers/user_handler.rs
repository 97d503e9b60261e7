//! User handlers.
//!
//! Per-user tweet listings answer an unknown user id with an empty list,
//! matching the service layer; only the profile lookups return 404.

use axum::{
    extract::{Path, Query, State},
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;

use common::{AppResult, OptionExt};
use domain::{Tweet, UserResponse};

use crate::state::AppState;

/// Lookup by username
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UsernameQuery {
    /// Exact username to look up
    pub username: String,
}

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_user_by_username))
        .route("/:id", get(get_user))
        .route("/:id/tweets", get(get_users_tweets))
        .route("/:id/replies", get(get_users_replies))
        .route("/:id/likes", get(get_users_liked_tweets))
}

/// Find a user by username
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    params(UsernameQuery),
    responses(
        (status = 200, description = "User profile", body = UserResponse),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user_by_username(
    State(state): State<AppState>,
    Query(query): Query<UsernameQuery>,
) -> AppResult<Json<UserResponse>> {
    let user = state
        .user_service
        .get_user_by_username(&query.username)
        .await?
        .ok_or_not_found()?;

    Ok(Json(UserResponse::from(user)))
}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User profile", body = UserResponse),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<UserResponse>> {
    let user = state.user_service.get_user_by_id(id).await?.ok_or_not_found()?;
    Ok(Json(UserResponse::from(user)))
}

/// Tweets authored by a user
#[utoipa::path(
    get,
    path = "/users/{id}/tweets",
    tag = "Users",
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Tweets, newest first", body = Vec<Tweet>)
    )
)]
pub async fn get_users_tweets(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Vec<Tweet>>> {
    Ok(Json(state.tweet_service.get_users_tweets(id).await?))
}

/// Replies authored by a user
#[utoipa::path(
    get,
    path = "/users/{id}/replies",
    tag = "Users",
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Replies, newest first", body = Vec<Tweet>)
    )
)]
pub async fn get_users_replies(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Vec<Tweet>>> {
    Ok(Json(state.tweet_service.get_users_replies(id).await?))
}

/// Tweets a user has liked
#[utoipa::path(
    get,
    path = "/users/{id}/likes",
    tag = "Users",
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Liked tweets, most recently liked first", body = Vec<Tweet>)
    )
)]
pub async fn get_users_liked_tweets(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Vec<Tweet>>> {
    Ok(Json(state.tweet_service.get_users_liked_tweets(id).await?))
}
