use crate::models::spotify::SpotifyPlaylist;
use crate::models::Track;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Free text typed by the user, after the `mood`/`emotion` alias is resolved.
#[derive(Debug, Validate)]
pub struct MoodRequest {
    #[validate(length(
        min = 1,
        max = 500,
        message = "Type an emotion or sentence (up to 500 characters)."
    ))]
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaylistSummary {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub url: Option<String>,
}

impl From<SpotifyPlaylist> for PlaylistSummary {
    fn from(playlist: SpotifyPlaylist) -> Self {
        PlaylistSummary {
            id: playlist.id,
            name: playlist.name,
            description: playlist.description,
            url: playlist.external_urls.and_then(|u| u.spotify),
        }
    }
}

/// A playlist together with the first few of its tracks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaylistGroup {
    pub playlist: PlaylistSummary,
    pub tracks: Vec<Track>,
}

/// Body of `GET /api/playlists`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistSearchResponse {
    pub query: String,
    pub results: Vec<PlaylistGroup>,
}
