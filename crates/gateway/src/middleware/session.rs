//! Session resolution middleware.
//!
//! Every request gets a `CurrentSession` extension. A missing bearer token
//! leaves it empty; so does a token that fails verification, since routes
//! that need a caller reject anonymous requests themselves.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::headers::{authorization::Bearer, Authorization, HeaderMapExt};

use common::{AppError, AppResult};
use domain::Session;

use crate::state::AppState;

/// Caller identity for the current request, if any.
#[derive(Debug, Clone, Default)]
pub struct CurrentSession(pub Option<Session>);

impl CurrentSession {
    /// Borrow the session for service calls.
    pub fn session(&self) -> Option<&Session> {
        self.0.as_ref()
    }

    /// Return the session or fail with `Unauthorized`.
    pub fn require(&self) -> AppResult<&Session> {
        self.0.as_ref().ok_or(AppError::Unauthorized)
    }
}

/// Resolve the bearer token (if any) into a session.
pub async fn session_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let session = request
        .headers()
        .typed_get::<Authorization<Bearer>>()
        .and_then(|Authorization(bearer)| {
            match state.auth_service.verify_token(bearer.token()) {
                Ok(claims) => Some(Session::from(claims)),
                Err(e) => {
                    tracing::debug!(error = %e, "Ignoring unverifiable bearer token");
                    None
                }
            }
        });

    request.extensions_mut().insert(CurrentSession(session));
    next.run(request).await
}
