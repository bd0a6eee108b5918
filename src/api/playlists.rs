use crate::api::middleware::SpotifySession;
use crate::api::AppState;
use crate::error::{AppError, Result};
use crate::models::{MoodRequest, PlaylistSearchResponse};
use crate::services::mood;
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use validator::Validate;

#[derive(Debug, Deserialize)]
pub struct MoodParams {
    mood: Option<String>,
    /// Older clients send `emotion`
    emotion: Option<String>,
}

impl MoodParams {
    fn text(self) -> String {
        self.mood
            .filter(|m| !m.trim().is_empty())
            .or(self.emotion)
            .map(|t| t.trim().to_string())
            .unwrap_or_default()
    }
}

pub fn playlist_routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/playlists", get(search_playlists))
}

async fn search_playlists(
    State(state): State<Arc<AppState>>,
    SpotifySession(session): SpotifySession,
    Query(params): Query<MoodParams>,
) -> Result<Json<PlaylistSearchResponse>> {
    let req = MoodRequest { text: params.text() };
    req.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let query = mood::resolve(&req.text);
    let matched = mood::classify(&req.text).map(|rule| rule.mood);
    tracing::info!(?matched, query = %query, "Resolved mood query");

    let response = state.aggregator.aggregate(&query, session.as_ref()).await?;
    tracing::debug!(
        "Returning {} playlist groups for query: {}",
        response.results.len(),
        query
    );

    Ok(Json(response))
}
