//! Tweet handlers.

use axum::{
    extract::{Extension, Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use common::{AppError, AppResult, OptionExt};
use domain::{CreateTweet, Tweet, MAX_TWEET_LENGTH};

use crate::extractors::ValidatedJson;
use crate::middleware::CurrentSession;
use crate::state::AppState;

/// Tweet search parameters
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Substring to match against tweet content
    pub q: Option<String>,
}

/// New tweet request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateTweetRequest {
    /// Tweet text
    #[validate(length(
        min = 1,
        max = MAX_TWEET_LENGTH,
        message = "Tweet must be 1-280 characters"
    ))]
    #[schema(example = "Hello, world!", max_length = 280)]
    pub content: String,
    /// Tweet being replied to
    pub reply_to_id: Option<Uuid>,
}

/// Create tweet routes
pub fn tweet_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_tweets).post(create_tweet))
        .route("/:id", get(get_tweet))
        .route("/:id/replies", get(get_tweet_replies))
        .route("/:id/like", post(like_tweet).delete(unlike_tweet))
}

/// List or search tweets
#[utoipa::path(
    get,
    path = "/tweets",
    tag = "Tweets",
    params(SearchQuery),
    responses(
        (status = 200, description = "Tweets, newest first", body = Vec<Tweet>)
    )
)]
pub async fn list_tweets(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> AppResult<Json<Vec<Tweet>>> {
    let tweets = state.tweet_service.get_tweets(query.q.as_deref()).await?;
    Ok(Json(tweets))
}

/// Post a tweet as the authenticated user
#[utoipa::path(
    post,
    path = "/tweets",
    tag = "Tweets",
    security(("bearer_auth" = [])),
    request_body = CreateTweetRequest,
    responses(
        (status = 201, description = "Tweet created", body = Tweet),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Replied-to tweet not found")
    )
)]
pub async fn create_tweet(
    Extension(session): Extension<CurrentSession>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateTweetRequest>,
) -> AppResult<(StatusCode, Json<Tweet>)> {
    let author = session.require()?;

    if payload.content.trim().is_empty() {
        return Err(AppError::validation("Tweet must not be blank"));
    }

    if let Some(parent_id) = payload.reply_to_id {
        state
            .tweet_service
            .get_tweet_by_id(parent_id)
            .await?
            .ok_or_not_found()?;
    }

    let tweet = state
        .tweet_service
        .create_tweet(CreateTweet {
            author_id: author.user_id,
            content: payload.content,
            reply_to_id: payload.reply_to_id,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(tweet)))
}

/// Get tweet by ID
#[utoipa::path(
    get,
    path = "/tweets/{id}",
    tag = "Tweets",
    params(
        ("id" = Uuid, Path, description = "Tweet ID")
    ),
    responses(
        (status = 200, description = "Tweet", body = Tweet),
        (status = 404, description = "Tweet not found")
    )
)]
pub async fn get_tweet(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Tweet>> {
    let tweet = state.tweet_service.get_tweet_by_id(id).await?.ok_or_not_found()?;
    Ok(Json(tweet))
}

/// Direct replies to a tweet
#[utoipa::path(
    get,
    path = "/tweets/{id}/replies",
    tag = "Tweets",
    params(
        ("id" = Uuid, Path, description = "Tweet ID")
    ),
    responses(
        (status = 200, description = "Replies, oldest first", body = Vec<Tweet>)
    )
)]
pub async fn get_tweet_replies(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Vec<Tweet>>> {
    Ok(Json(state.tweet_service.get_tweet_replies(id).await?))
}

/// Like a tweet. Anonymous requests are accepted and ignored; an
/// authenticated like of a missing tweet is a 404.
#[utoipa::path(
    post,
    path = "/tweets/{id}/like",
    tag = "Tweets",
    security((), ("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Tweet ID")
    ),
    responses(
        (status = 204, description = "Like recorded (no-op without a session)"),
        (status = 404, description = "Tweet not found")
    )
)]
pub async fn like_tweet(
    Extension(session): Extension<CurrentSession>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    if session.session().is_some() {
        state.tweet_service.get_tweet_by_id(id).await?.ok_or_not_found()?;
    }
    state.tweet_service.like_tweet(session.session(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Remove a like. Anonymous requests are accepted and ignored.
#[utoipa::path(
    delete,
    path = "/tweets/{id}/like",
    tag = "Tweets",
    security((), ("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Tweet ID")
    ),
    responses(
        (status = 204, description = "Like removed (no-op without a session)")
    )
)]
pub async fn unlike_tweet(
    Extension(session): Extension<CurrentSession>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.tweet_service.unlike_tweet(session.session(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}
