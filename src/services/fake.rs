//! In-memory [`MusicService`] for tests.

use crate::error::{AppError, Result};
use crate::models::spotify::{
    ExternalUrls, PlaylistTrackItem, SpotifyArtist, SpotifyPlaylist, SpotifyTrack, TokenResponse,
};
use crate::services::aggregator::{SEARCH_LIMIT, TRACKS_PER_PLAYLIST};
use crate::services::spotify::MusicService;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

/// Scripted Spotify: fixed search hits, per-playlist listings, optional
/// per-playlist failures or delays, and canned token responses.
#[derive(Default)]
pub struct FakeSpotify {
    pub playlists: Vec<Option<SpotifyPlaylist>>,
    pub tracks: HashMap<String, Vec<PlaylistTrackItem>>,
    pub failing: Vec<String>,
    pub delays_ms: HashMap<String, u64>,
    pub search_unauthorized: bool,
    /// Returned by both token grants; `None` makes them fail with `invalid_grant`
    pub token: Option<TokenResponse>,
    pub calls: AtomicUsize,
    /// Access tokens seen by API calls, in order
    pub seen_tokens: Mutex<Vec<String>>,
}

impl FakeSpotify {
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record(&self, access_token: &str) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut seen) = self.seen_tokens.lock() {
            seen.push(access_token.to_string());
        }
    }

    fn token_result(&self) -> Result<TokenResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.token.clone().ok_or_else(|| {
            AppError::TokenExchange(serde_json::json!({
                "error": "invalid_grant",
                "error_description": "Invalid authorization code"
            }))
        })
    }
}

#[async_trait]
impl MusicService for FakeSpotify {
    fn authorize_url(&self) -> Result<String> {
        Ok("https://accounts.test/authorize?response_type=code&client_id=id".to_string())
    }

    async fn exchange_code(&self, _code: &str) -> Result<TokenResponse> {
        self.token_result()
    }

    async fn refresh_token(&self, _refresh_token: &str) -> Result<TokenResponse> {
        self.token_result()
    }

    async fn search_playlists(
        &self,
        access_token: &str,
        _query: &str,
        limit: u32,
    ) -> Result<Vec<Option<SpotifyPlaylist>>> {
        self.record(access_token);
        assert_eq!(limit, SEARCH_LIMIT);
        if self.search_unauthorized {
            return Err(AppError::NotConnected);
        }
        Ok(self.playlists.clone())
    }

    async fn playlist_tracks(
        &self,
        access_token: &str,
        playlist_id: &str,
        limit: u32,
    ) -> Result<Vec<PlaylistTrackItem>> {
        self.record(access_token);
        assert_eq!(limit, TRACKS_PER_PLAYLIST);
        if let Some(ms) = self.delays_ms.get(playlist_id) {
            tokio::time::sleep(Duration::from_millis(*ms)).await;
        }
        if self.failing.iter().any(|id| id == playlist_id) {
            return Err(AppError::Spotify("connection reset".to_string()));
        }
        Ok(self.tracks.get(playlist_id).cloned().unwrap_or_default())
    }
}

pub fn playlist(id: &str) -> Option<SpotifyPlaylist> {
    Some(SpotifyPlaylist {
        id: id.to_string(),
        name: format!("Playlist {}", id),
        description: None,
        external_urls: Some(ExternalUrls {
            spotify: Some(format!("https://open.spotify.com/playlist/{}", id)),
        }),
    })
}

pub fn item(id: &str, preview: Option<&str>) -> PlaylistTrackItem {
    PlaylistTrackItem {
        track: Some(SpotifyTrack {
            id: Some(id.to_string()),
            name: format!("Track {}", id),
            artists: vec![SpotifyArtist {
                name: "Artist".to_string(),
            }],
            preview_url: preview.map(str::to_string),
            external_urls: None,
        }),
    }
}

pub fn token(access: &str, refresh: Option<&str>) -> TokenResponse {
    TokenResponse {
        access_token: access.to_string(),
        refresh_token: refresh.map(str::to_string),
        expires_in: Some(3600),
    }
}
