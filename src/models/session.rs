use crate::models::spotify::TokenResponse;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Credentials for calling Spotify on the user's behalf.
#[derive(Debug, Clone, Serialize)]
pub struct SessionToken {
    #[serde(skip_serializing)]
    pub access_token: String,
    #[serde(skip_serializing)]
    pub refresh_token: Option<String>,
    pub expires_in: Option<u64>,
    pub obtained_at: DateTime<Utc>,
}

impl SessionToken {
    /// Token supplied directly by the browser (implicit grant); it cannot be refreshed.
    pub fn bearer(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: None,
            expires_in: None,
            obtained_at: Utc::now(),
        }
    }

    /// Applies a refresh-grant response. Spotify only sometimes rotates the
    /// refresh token, so the current one is kept when none is returned.
    pub fn refreshed(&self, response: TokenResponse) -> Self {
        Self {
            access_token: response.access_token,
            refresh_token: response.refresh_token.or_else(|| self.refresh_token.clone()),
            expires_in: response.expires_in,
            obtained_at: Utc::now(),
        }
    }

    /// Time since the token was issued or last refreshed.
    pub fn age(&self) -> chrono::Duration {
        Utc::now() - self.obtained_at
    }
}

impl From<TokenResponse> for SessionToken {
    fn from(response: TokenResponse) -> Self {
        Self {
            access_token: response.access_token,
            refresh_token: response.refresh_token,
            expires_in: response.expires_in,
            obtained_at: Utc::now(),
        }
    }
}
