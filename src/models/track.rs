use crate::models::spotify::SpotifyTrack;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub id: Option<String>,
    pub name: String,
    /// Artist names joined with ", "
    pub artists: String,
    /// Missing for many tracks; never filled in when Spotify has none
    pub preview_url: Option<String>,
    pub spotify_url: Option<String>,
}

impl From<SpotifyTrack> for Track {
    fn from(track: SpotifyTrack) -> Self {
        let artists = track
            .artists
            .into_iter()
            .map(|a| a.name)
            .collect::<Vec<_>>()
            .join(", ");

        Track {
            id: track.id,
            name: track.name,
            artists,
            preview_url: track.preview_url,
            spotify_url: track.external_urls.and_then(|u| u.spotify),
        }
    }
}
