use crate::config::Config;
use crate::error::{AppError, Result};
use crate::models::spotify::{
    Paging, PlaylistTrackItem, SearchResponse, SpotifyPlaylist, TokenResponse,
};
use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

/// The Spotify operations the service depends on.
#[async_trait]
pub trait MusicService: Send + Sync {
    /// URL the browser is sent to for the authorization-code grant.
    fn authorize_url(&self) -> Result<String>;

    async fn exchange_code(&self, code: &str) -> Result<TokenResponse>;

    async fn refresh_token(&self, refresh_token: &str) -> Result<TokenResponse>;

    /// Playlists matching `query`, in Spotify's order. `null` entries are kept.
    async fn search_playlists(
        &self,
        access_token: &str,
        query: &str,
        limit: u32,
    ) -> Result<Vec<Option<SpotifyPlaylist>>>;

    async fn playlist_tracks(
        &self,
        access_token: &str,
        playlist_id: &str,
        limit: u32,
    ) -> Result<Vec<PlaylistTrackItem>>;
}

#[derive(Debug, Clone)]
pub struct SpotifyClient {
    accounts_url: String,
    api_url: String,
    client_id: String,
    client_secret: String,
    redirect_uri: String,
    scopes: String,
    client: Client,
}

impl SpotifyClient {
    pub fn new(config: &Config) -> Self {
        Self {
            accounts_url: config.spotify_accounts_url.clone(),
            api_url: config.spotify_api_url.clone(),
            client_id: config.spotify_client_id.clone(),
            client_secret: config.spotify_client_secret.clone(),
            redirect_uri: config.redirect_uri.clone(),
            scopes: config.spotify_scopes.clone(),
            client: Client::new(),
        }
    }

    async fn request_token(&self, form: &[(&str, &str)]) -> Result<TokenResponse> {
        let url = format!("{}/api/token", self.accounts_url);

        let response = self
            .client
            .post(&url)
            .basic_auth(&self.client_id, Some(&self.client_secret))
            .form(form)
            .send()
            .await
            .map_err(|e| {
                AppError::TokenExchange(json!({ "error": format!("Request failed: {}", e) }))
            })?;

        let status = response.status();
        let body: Value = response.json().await.map_err(|e| {
            AppError::TokenExchange(json!({
                "error": format!("Invalid token response ({}): {}", status, e)
            }))
        })?;

        if !status.is_success() || body.get("error").is_some() {
            return Err(AppError::TokenExchange(body));
        }

        serde_json::from_value(body).map_err(|e| {
            AppError::TokenExchange(json!({
                "error": format!("Failed to parse token response: {}", e)
            }))
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        access_token: &str,
        params: &[(&str, String)],
    ) -> Result<T> {
        let response = self
            .client
            .get(url)
            .bearer_auth(access_token)
            .query(params)
            .send()
            .await
            .map_err(|e| AppError::Spotify(format!("Request failed: {}", e)))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            tracing::info!("Spotify rejected the access token for {}", url);
            return Err(AppError::NotConnected);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Spotify API error: {} - {}", status, truncate(&body));
            return Err(AppError::Spotify(format!("API returned status: {}", status)));
        }

        let response_text = response
            .text()
            .await
            .map_err(|e| AppError::Spotify(format!("Failed to read response: {}", e)))?;

        serde_json::from_str(&response_text).map_err(|e| {
            AppError::Spotify(format!(
                "Failed to parse response: {} - Response: {}",
                e,
                truncate(&response_text)
            ))
        })
    }
}

/// Shortens upstream bodies for logs and error messages.
fn truncate(body: &str) -> String {
    body.chars().take(200).collect()
}

#[async_trait]
impl MusicService for SpotifyClient {
    fn authorize_url(&self) -> Result<String> {
        let url = Url::parse_with_params(
            &format!("{}/authorize", self.accounts_url),
            &[
                ("response_type", "code"),
                ("client_id", self.client_id.as_str()),
                ("scope", self.scopes.as_str()),
                ("redirect_uri", self.redirect_uri.as_str()),
            ],
        )
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid accounts URL: {}", e)))?;

        Ok(url.to_string())
    }

    async fn exchange_code(&self, code: &str) -> Result<TokenResponse> {
        tracing::debug!("Exchanging authorization code");
        self.request_token(&[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", self.redirect_uri.as_str()),
        ])
        .await
    }

    async fn refresh_token(&self, refresh_token: &str) -> Result<TokenResponse> {
        tracing::debug!("Refreshing access token");
        self.request_token(&[
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token),
        ])
        .await
    }

    async fn search_playlists(
        &self,
        access_token: &str,
        query: &str,
        limit: u32,
    ) -> Result<Vec<Option<SpotifyPlaylist>>> {
        let url = format!("{}/search", self.api_url);
        tracing::debug!("Searching Spotify playlists with query: {}", query);

        let data: SearchResponse = self
            .get_json(
                &url,
                access_token,
                &[
                    ("q", query.to_string()),
                    ("type", "playlist".to_string()),
                    ("limit", limit.to_string()),
                ],
            )
            .await?;

        Ok(data.playlists.unwrap_or_default().items)
    }

    async fn playlist_tracks(
        &self,
        access_token: &str,
        playlist_id: &str,
        limit: u32,
    ) -> Result<Vec<PlaylistTrackItem>> {
        let url = format!("{}/playlists/{}/tracks", self.api_url, playlist_id);

        let page: Paging<PlaylistTrackItem> = self
            .get_json(&url, access_token, &[("limit", limit.to_string())])
            .await?;

        Ok(page.items)
    }
}
