pub mod aggregator;
pub mod mood;
pub mod session;
pub mod spotify;

#[cfg(test)]
pub mod fake;

pub use aggregator::PlaylistAggregator;
pub use session::SessionStore;
pub use spotify::{MusicService, SpotifyClient};
