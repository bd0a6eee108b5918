//! Serde mirrors of the Spotify Web API payloads this service consumes.
//!
//! Only the fields that end up in a response are modelled. Spotify returns
//! `null` for playlists it can no longer show and for removed tracks, so those
//! slots are `Option` rather than being assumed present.

use serde::Deserialize;

/// Successful body of `POST /api/token`.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub expires_in: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExternalUrls {
    #[serde(default)]
    pub spotify: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub playlists: Option<Paging<Option<SpotifyPlaylist>>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Paging<T> {
    #[serde(default)]
    pub items: Vec<T>,
}

impl<T> Default for Paging<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SpotifyPlaylist {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub external_urls: Option<ExternalUrls>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlaylistTrackItem {
    #[serde(default)]
    pub track: Option<SpotifyTrack>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SpotifyTrack {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub artists: Vec<SpotifyArtist>,
    #[serde(default)]
    pub preview_url: Option<String>,
    #[serde(default)]
    pub external_urls: Option<ExternalUrls>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SpotifyArtist {
    #[serde(default)]
    pub name: String,
}
