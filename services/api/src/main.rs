use std::time::Duration;

use sea_orm::Database;
use tracing::info;

use wellbeat_api::config::ApiConfig;
use wellbeat_api::router::build_router;
use wellbeat_api::state::{AiSettings, AppState};
use wellbeat_auth_types::token::AuthVerifier;
use wellbeat_core::config::Config as _;

#[tokio::main]
async fn main() {
    wellbeat_core::tracing::init_tracing();

    let config = ApiConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    // Bounded timeout for the only external call (the provider); on expiry
    // the recommendation engine degrades to its diagnostic path.
    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.ai_timeout_secs))
        .build()
        .expect("failed to build HTTP client");

    let state = AppState {
        db,
        verifier: AuthVerifier {
            secret: config.jwt_secret,
            issuer: config.jwt_issuer,
            audience: config.jwt_audience,
        },
        ai: AiSettings {
            api_key: config.ai_api_key,
            base_url: config.ai_base_url,
            model: config.ai_model,
        },
        http,
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.api_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("api service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
