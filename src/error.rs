use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("not connected to Spotify. Visit /auth/login to connect.")]
    NotConnected,

    #[error("no refresh token")]
    NoRefreshToken,

    #[error("Validation error: {0}")]
    Validation(String),

    /// Error body returned by the token endpoint, passed through untouched
    #[error("Token exchange failed: {0}")]
    TokenExchange(serde_json::Value),

    #[error("Spotify error: {0}")]
    Spotify(String),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::NotConnected => (StatusCode::FORBIDDEN, self.to_string()),
            AppError::NoRefreshToken => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::TokenExchange(body) => {
                tracing::warn!("Token exchange rejected: {}", body);
                return (StatusCode::BAD_REQUEST, Json(body)).into_response();
            }
            AppError::Spotify(msg) => (StatusCode::BAD_GATEWAY, msg),
            AppError::Internal(ref e) => {
                tracing::error!("Internal error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
