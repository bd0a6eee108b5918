use axum::{
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use rust_embed::RustEmbed;

// Embed the static page served at `/`
#[derive(RustEmbed)]
#[folder = "frontend/"]
pub struct Assets;

pub async fn serve_frontend(uri: Uri) -> impl IntoResponse {
    let path = uri.path().trim_start_matches('/');

    // Try to serve the requested file
    if let Some(content) = Assets::get(path) {
        return serve_asset(path, content.data.into_owned());
    }

    // For SPA routing, fall back to index.html for non-API routes
    if !path.starts_with("api/") && !path.starts_with("auth/") {
        if let Some(content) = Assets::get("index.html") {
            return serve_asset("index.html", content.data.into_owned());
        }
    }

    tracing::debug!("No asset for {}", uri.path());
    (StatusCode::NOT_FOUND, "404 Not Found").into_response()
}

fn serve_asset(path: &str, data: Vec<u8>) -> Response {
    let mime = mime_guess::from_path(path).first_or_octet_stream();

    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, mime.to_string()),
            (header::CACHE_CONTROL, cache_control_value(path).to_string()),
        ],
        data,
    )
        .into_response()
}

fn cache_control_value(path: &str) -> &'static str {
    // The page is tiny and redeployed in place, so always revalidate it
    if path.ends_with(".html") {
        "no-cache"
    } else {
        "public, max-age=300"
    }
}
