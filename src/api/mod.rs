pub mod auth;
pub mod health;
pub mod middleware;
pub mod playlists;

pub use auth::auth_routes;
pub use playlists::playlist_routes;

use crate::config::Config;
use crate::frontend;
use crate::services::{MusicService, PlaylistAggregator, SessionStore};
use axum::{
    http::{header, HeaderValue, Method},
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

pub struct AppState {
    pub config: Arc<Config>,
    pub spotify: Arc<dyn MusicService>,
    pub aggregator: Arc<PlaylistAggregator>,
    pub session: Arc<SessionStore>,
}

impl AppState {
    pub fn new(config: Config, spotify: Arc<dyn MusicService>) -> Self {
        Self {
            config: Arc::new(config),
            aggregator: Arc::new(PlaylistAggregator::new(spotify.clone())),
            spotify,
            session: Arc::new(SessionStore::new()),
        }
    }
}

/// Full application router: auth flow, playlist API and the embedded frontend.
pub fn app(state: Arc<AppState>) -> Router {
    let cors = cors_layer(&state.config.cors_origins);

    Router::new()
        .nest("/auth", auth_routes())
        .merge(playlist_routes())
        .route("/health", get(health::health))
        .with_state(state)
        // Frontend SPA - catch-all route (must be last)
        .fallback(get(frontend::serve_frontend))
        .layer(cors)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]);

    if origins.iter().any(|o| o == "*") {
        return layer.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| match o.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", o);
                None
            }
        })
        .collect();

    layer.allow_origin(AllowOrigin::list(allowed))
}
