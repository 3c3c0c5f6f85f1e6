use serde::Deserialize;

use wellbeat_core::config::Config;

/// API service configuration loaded from environment variables.
///
/// Loaded once in `main` and threaded into [`crate::state::AppState`];
/// business logic never reads the environment directly.
#[derive(Debug, Deserialize)]
pub struct ApiConfig {
    /// PostgreSQL connection URL. Env var: `DATABASE_URL`.
    pub database_url: String,
    /// TCP port for the HTTP server (default 3110). Env var: `API_PORT`.
    #[serde(default = "default_api_port")]
    pub api_port: u16,
    /// HMAC secret for signing access tokens. Env var: `JWT_SECRET`.
    pub jwt_secret: String,
    /// Issuer claim stamped into and required of every token. Env var: `JWT_ISSUER`.
    #[serde(default = "default_jwt_issuer")]
    pub jwt_issuer: String,
    /// Audience claim stamped into and required of every token. Env var: `JWT_AUDIENCE`.
    #[serde(default = "default_jwt_audience")]
    pub jwt_audience: String,
    /// API key for the text-generation provider. Absent key degrades the
    /// recommendation endpoint to a diagnostic response. Env var: `AI_API_KEY`.
    #[serde(default)]
    pub ai_api_key: Option<String>,
    /// Base URL of the text-generation provider. Env var: `AI_BASE_URL`.
    #[serde(default = "default_ai_base_url")]
    pub ai_base_url: String,
    /// Provider model identifier. Env var: `AI_MODEL`.
    #[serde(default = "default_ai_model")]
    pub ai_model: String,
    /// Timeout for provider calls, in seconds. Env var: `AI_TIMEOUT_SECS`.
    #[serde(default = "default_ai_timeout_secs")]
    pub ai_timeout_secs: u64,
}

impl Config for ApiConfig {}

fn default_api_port() -> u16 {
    3110
}

fn default_jwt_issuer() -> String {
    "wellbeat".to_owned()
}

fn default_jwt_audience() -> String {
    "wellbeat-clients".to_owned()
}

fn default_ai_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_owned()
}

fn default_ai_model() -> String {
    "gemini-2.0-flash".to_owned()
}

fn default_ai_timeout_secs() -> u64 {
    15
}
