use crate::error::{AppError, Result};
use crate::models::spotify::{PlaylistTrackItem, SpotifyPlaylist};
use crate::models::{PlaylistGroup, PlaylistSearchResponse, PlaylistSummary, SessionToken, Track};
use crate::services::spotify::MusicService;
use futures::future::join_all;
use std::sync::Arc;

/// Playlists requested per search.
pub const SEARCH_LIMIT: u32 = 6;
/// Tracks sampled from each playlist.
pub const TRACKS_PER_PLAYLIST: u32 = 6;

/// Turns a search query into playlists with a sample of their tracks.
pub struct PlaylistAggregator {
    spotify: Arc<dyn MusicService>,
}

impl PlaylistAggregator {
    pub fn new(spotify: Arc<dyn MusicService>) -> Self {
        Self { spotify }
    }

    /// Searches playlists for `query` and fetches tracks for each hit.
    ///
    /// Track listings are fetched concurrently. A playlist whose listing
    /// fails is logged and left out; only the search itself can fail the call.
    pub async fn aggregate(
        &self,
        query: &str,
        session: Option<&SessionToken>,
    ) -> Result<PlaylistSearchResponse> {
        let session = session.ok_or(AppError::NotConnected)?;

        let playlists: Vec<SpotifyPlaylist> = self
            .spotify
            .search_playlists(&session.access_token, query, SEARCH_LIMIT)
            .await?
            .into_iter()
            .flatten()
            .collect();

        tracing::debug!("Found {} playlists for query: {}", playlists.len(), query);

        let fetches = playlists
            .into_iter()
            .map(|playlist| self.fetch_group(&session.access_token, playlist));

        let results = join_all(fetches)
            .await
            .into_iter()
            .filter_map(|outcome| match outcome {
                Ok(group) => Some(group),
                Err((playlist_id, e)) => {
                    tracing::warn!("playlist fetch error for {}: {}", playlist_id, e);
                    None
                }
            })
            .collect();

        Ok(PlaylistSearchResponse {
            query: query.to_string(),
            results,
        })
    }

    async fn fetch_group(
        &self,
        access_token: &str,
        playlist: SpotifyPlaylist,
    ) -> std::result::Result<PlaylistGroup, (String, AppError)> {
        let items = self
            .spotify
            .playlist_tracks(access_token, &playlist.id, TRACKS_PER_PLAYLIST)
            .await
            .map_err(|e| (playlist.id.clone(), e))?;

        Ok(PlaylistGroup {
            playlist: PlaylistSummary::from(playlist),
            tracks: normalize_tracks(items),
        })
    }
}

/// Converts playlist items to tracks, dropping slots whose track was removed.
fn normalize_tracks(items: Vec<PlaylistTrackItem>) -> Vec<Track> {
    items
        .into_iter()
        .filter_map(|item| item.track)
        .map(Track::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::fake::{item, playlist, FakeSpotify};
    use std::collections::HashMap;

    fn session() -> SessionToken {
        SessionToken::bearer("token")
    }

    fn group_ids(response: &PlaylistSearchResponse) -> Vec<&str> {
        response
            .results
            .iter()
            .map(|g| g.playlist.id.as_str())
            .collect()
    }

    #[tokio::test]
    async fn test_no_session_makes_no_calls() {
        let fake = Arc::new(FakeSpotify {
            playlists: vec![playlist("a")],
            ..Default::default()
        });
        let aggregator = PlaylistAggregator::new(fake.clone());

        let result = aggregator.aggregate("sad mellow", None).await;

        assert!(matches!(result, Err(AppError::NotConnected)));
        assert_eq!(fake.call_count(), 0);
    }

    #[tokio::test]
    async fn test_empty_search_is_not_an_error() {
        let aggregator = PlaylistAggregator::new(Arc::new(FakeSpotify::default()));
        let response = aggregator.aggregate("jazz", Some(&session())).await.unwrap();
        assert_eq!(response.query, "jazz");
        assert!(response.results.is_empty());
    }

    #[tokio::test]
    async fn test_failed_playlist_is_omitted() {
        let fake = FakeSpotify {
            playlists: vec![playlist("a"), playlist("b"), playlist("c")],
            tracks: HashMap::from([
                ("a".to_string(), vec![item("a1", None)]),
                ("c".to_string(), vec![item("c1", None)]),
            ]),
            failing: vec!["b".to_string()],
            ..Default::default()
        };
        let aggregator = PlaylistAggregator::new(Arc::new(fake));

        let response = aggregator
            .aggregate("feel good upbeat", Some(&session()))
            .await
            .unwrap();

        assert_eq!(group_ids(&response), vec!["a", "c"]);
    }

    #[tokio::test]
    async fn test_single_surviving_playlist() {
        let fake = FakeSpotify {
            playlists: vec![playlist("a"), playlist("b"), playlist("c")],
            tracks: HashMap::from([("b".to_string(), vec![item("b1", None)])]),
            failing: vec!["a".to_string(), "c".to_string()],
            ..Default::default()
        };
        let aggregator = PlaylistAggregator::new(Arc::new(fake));

        let response = aggregator
            .aggregate("sad mellow", Some(&session()))
            .await
            .unwrap();

        assert_eq!(group_ids(&response), vec!["b"]);
        assert_eq!(response.results[0].tracks.len(), 1);
    }

    #[tokio::test]
    async fn test_order_follows_search_not_completion() {
        // "a" finishes last but must still come first
        let fake = FakeSpotify {
            playlists: vec![playlist("a"), playlist("b")],
            tracks: HashMap::from([
                ("a".to_string(), vec![item("a1", None), item("a2", None), item("a3", None)]),
                ("b".to_string(), vec![item("b1", None)]),
            ]),
            delays_ms: HashMap::from([("a".to_string(), 50)]),
            ..Default::default()
        };
        let aggregator = PlaylistAggregator::new(Arc::new(fake));

        let response = aggregator.aggregate("q", Some(&session())).await.unwrap();

        assert_eq!(group_ids(&response), vec!["a", "b"]);
        let track_ids: Vec<_> = response.results[0]
            .tracks
            .iter()
            .map(|t| t.id.as_deref().unwrap())
            .collect();
        assert_eq!(track_ids, vec!["a1", "a2", "a3"]);
    }

    #[tokio::test]
    async fn test_preview_url_passed_through() {
        let fake = FakeSpotify {
            playlists: vec![playlist("a")],
            tracks: HashMap::from([(
                "a".to_string(),
                vec![item("with", Some("https://p.scdn.co/mp3-preview/x")), item("without", None)],
            )]),
            ..Default::default()
        };
        let aggregator = PlaylistAggregator::new(Arc::new(fake));

        let response = aggregator.aggregate("q", Some(&session())).await.unwrap();
        let tracks = &response.results[0].tracks;

        assert_eq!(
            tracks[0].preview_url.as_deref(),
            Some("https://p.scdn.co/mp3-preview/x")
        );
        assert!(tracks[1].preview_url.is_none());
    }

    #[tokio::test]
    async fn test_removed_tracks_and_null_playlists_are_skipped() {
        let fake = FakeSpotify {
            playlists: vec![None, playlist("a"), None],
            tracks: HashMap::from([(
                "a".to_string(),
                vec![item("a1", None), PlaylistTrackItem { track: None }, item("a2", None)],
            )]),
            ..Default::default()
        };
        let aggregator = PlaylistAggregator::new(Arc::new(fake));

        let response = aggregator.aggregate("q", Some(&session())).await.unwrap();

        assert_eq!(group_ids(&response), vec!["a"]);
        let names: Vec<_> = response.results[0].tracks.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Track a1", "Track a2"]);
        assert_eq!(
            response.results[0].playlist.url.as_deref(),
            Some("https://open.spotify.com/playlist/a")
        );
    }

    #[tokio::test]
    async fn test_unauthorized_search_propagates() {
        let fake = FakeSpotify {
            search_unauthorized: true,
            ..Default::default()
        };
        let aggregator = PlaylistAggregator::new(Arc::new(fake));

        let result = aggregator.aggregate("q", Some(&session())).await;
        assert!(matches!(result, Err(AppError::NotConnected)));
    }
}
