pub mod playlist;
pub mod session;
pub mod spotify;
pub mod track;

pub use playlist::{MoodRequest, PlaylistGroup, PlaylistSearchResponse, PlaylistSummary};
pub use session::SessionToken;
pub use track::Track;
