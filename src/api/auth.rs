use crate::api::AppState;
use crate::error::{AppError, Result};
use crate::models::SessionToken;
use axum::{
    extract::{Query, State},
    response::Redirect,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct CallbackParams {
    code: Option<String>,
    /// Set by Spotify when the user declines access
    error: Option<String>,
}

pub fn auth_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/login", get(login))
        .route("/callback", get(callback))
        .route("/refresh", get(refresh))
}

async fn login(State(state): State<Arc<AppState>>) -> Result<Redirect> {
    let url = state.spotify.authorize_url()?;
    tracing::debug!("Redirecting to Spotify authorization");
    Ok(Redirect::to(&url))
}

async fn callback(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CallbackParams>,
) -> Result<Redirect> {
    let code = match (params.code, params.error) {
        (Some(code), _) if !code.is_empty() => code,
        (_, Some(error)) => {
            return Err(AppError::Validation(format!(
                "Spotify authorization failed: {}",
                error
            )))
        }
        _ => {
            return Err(AppError::Validation(
                "No code received from Spotify".to_string(),
            ))
        }
    };

    let token = state.spotify.exchange_code(&code).await?;
    state.session.replace(SessionToken::from(token)).await;

    Ok(Redirect::to(&format!(
        "{}/?connected=1",
        state.config.frontend_url
    )))
}

async fn refresh(State(state): State<Arc<AppState>>) -> Result<Json<Value>> {
    let refresh_token = state
        .session
        .refresh_credential()
        .await
        .ok_or(AppError::NoRefreshToken)?;

    let response = state.spotify.refresh_token(&refresh_token).await?;

    let token = match state.session.current().await {
        Some(current) => current.refreshed(response),
        None => SessionToken::from(response),
    };
    state.session.replace(token).await;

    Ok(Json(json!({ "ok": true })))
}
