use crate::api::AppState;
use crate::error::{AppError, Result};
use crate::models::SessionToken;
use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use std::sync::Arc;

/// Spotify session for the current request.
///
/// A browser that went through the implicit grant sends its own token as
/// `Authorization: Bearer ...`; otherwise the stored session is used.
pub struct SpotifySession(pub Option<SessionToken>);

#[async_trait]
impl FromRequestParts<Arc<AppState>> for SpotifySession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self> {
        let bearer = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|t| !t.is_empty());

        if let Some(token) = bearer {
            return Ok(SpotifySession(Some(SessionToken::bearer(token))));
        }

        Ok(SpotifySession(state.session.current().await))
    }
}
