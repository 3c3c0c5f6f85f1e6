use axum::http::StatusCode;

/// Handler for `GET /health` — liveness check.
pub async fn health() -> StatusCode {
    StatusCode::OK
}

/// Handler for `GET /health/ready` — readiness check (override per service as needed).
pub async fn ready() -> StatusCode {
    StatusCode::OK
}
