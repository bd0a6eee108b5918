use crate::models::SessionToken;
use tokio::sync::RwLock;

/// Holds the Spotify session for this process. Login replaces it outright.
#[derive(Debug, Default)]
pub struct SessionStore {
    token: RwLock<Option<SessionToken>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the current token; later writes do not affect it.
    pub async fn current(&self) -> Option<SessionToken> {
        self.token.read().await.clone()
    }

    pub async fn replace(&self, token: SessionToken) {
        let mut slot = self.token.write().await;
        if let Some(previous) = slot.as_ref() {
            tracing::debug!(
                age_secs = previous.age().num_seconds(),
                obtained_at = %previous.obtained_at,
                "Replacing Spotify session"
            );
        }
        tracing::info!(
            expires_in = ?token.expires_in,
            obtained_at = %token.obtained_at,
            "Stored new Spotify session"
        );
        *slot = Some(token);
    }

    pub async fn refresh_credential(&self) -> Option<String> {
        self.token
            .read()
            .await
            .as_ref()
            .and_then(|t| t.refresh_token.clone())
    }

    pub async fn is_connected(&self) -> bool {
        self.token.read().await.is_some()
    }
}
