use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub spotify_client_id: String,
    pub spotify_client_secret: String,
    /// OAuth redirect registered with Spotify, normally `<host>/auth/callback`
    pub redirect_uri: String,
    /// Where the browser lands after a successful login
    pub frontend_url: String,
    /// Space-separated OAuth scopes requested on login
    pub spotify_scopes: String,
    pub spotify_accounts_url: String,
    pub spotify_api_url: String,
    pub server_host: String,
    pub server_port: u16,
    /// Allowed CORS origins (comma-separated). Use "*" for any origin (development only).
    pub cors_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let spotify_client_id = env::var("SPOTIFY_CLIENT_ID").unwrap_or_default();
        let spotify_client_secret = env::var("SPOTIFY_CLIENT_SECRET").unwrap_or_default();

        // The server still starts so the frontend can be served, but login will fail upstream
        if spotify_client_id.is_empty() || spotify_client_secret.is_empty() {
            tracing::warn!("SPOTIFY_CLIENT_ID or SPOTIFY_CLIENT_SECRET not set");
        }

        let server_port = match env::var("PORT") {
            Ok(port) => port
                .trim()
                .parse()
                .map_err(|e| anyhow::anyhow!("PORT must be a valid port number ({}): {}", port, e))?,
            Err(_) => 3000,
        };

        let cors_origins = parse_list(
            &env::var("CORS_ORIGINS")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
        );

        Ok(Config {
            spotify_client_id,
            spotify_client_secret,
            redirect_uri: env::var("REDIRECT_URI")
                .map(|v| v.trim().to_string())
                .unwrap_or_else(|_| "http://localhost:3000/auth/callback".to_string()),
            frontend_url: env::var("FRONTEND_URL")
                .map(|v| v.trim().trim_end_matches('/').to_string())
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            spotify_scopes: env::var("SPOTIFY_SCOPES")
                .unwrap_or_else(|_| "user-read-private user-read-email".to_string()),
            spotify_accounts_url: env::var("SPOTIFY_ACCOUNTS_URL")
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or_else(|_| "https://accounts.spotify.com".to_string()),
            spotify_api_url: env::var("SPOTIFY_API_URL")
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or_else(|_| "https://api.spotify.com/v1".to_string()),
            server_host: env::var("SERVER_HOST")
                .unwrap_or_else(|_| "0.0.0.0".to_string()),
            server_port,
            cors_origins,
        })
    }
}

fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
