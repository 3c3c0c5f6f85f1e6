use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use uuid::Uuid;

use wellbeat_api::router::build_router;
use wellbeat_testing::auth::TokenMint;

use crate::helpers::test_state;

fn server() -> TestServer {
    TestServer::new(build_router(test_state())).expect("test server")
}

#[tokio::test]
async fn health_endpoints_respond_without_auth() {
    let server = server();
    server.get("/health").await.assert_status(StatusCode::OK);
    server
        .get("/health/ready")
        .await
        .assert_status(StatusCode::OK);
}

#[tokio::test]
async fn protected_route_rejects_missing_token() {
    let server = server();
    let response = server.get("/api/v1/users/me").await;
    response.assert_status(StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["kind"], "UNAUTHENTICATED");
}

#[tokio::test]
async fn protected_route_rejects_garbage_token() {
    let server = server();
    let response = server
        .get("/api/v1/users/me")
        .authorization_bearer("not-a-jwt")
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn protected_route_rejects_expired_token() {
    let server = server();
    let token = TokenMint::collaborator(Uuid::new_v4()).expired_token();
    let response = server
        .get("/api/v1/users/me")
        .authorization_bearer(&token)
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn manager_only_listing_rejects_collaborator_with_403() {
    let server = server();
    let token = TokenMint::collaborator(Uuid::new_v4()).token();
    let response = server
        .get("/api/v1/users")
        .authorization_bearer(&token)
        .await;
    response.assert_status(StatusCode::FORBIDDEN);
    let body: serde_json::Value = response.json();
    assert_eq!(body["kind"], "FORBIDDEN");
}

#[tokio::test]
async fn dashboard_summary_rejects_collaborator_with_403() {
    let server = server();
    let token = TokenMint::collaborator(Uuid::new_v4()).token();
    let response = server
        .get("/api/v1/dashboard/summary")
        .authorization_bearer(&token)
        .await;
    response.assert_status(StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn monthly_report_rejects_collaborator_with_403() {
    let server = server();
    let token = TokenMint::collaborator(Uuid::new_v4()).token();
    let response = server
        .get("/api/v1/ai/monthly-report?year=2026&month=3")
        .authorization_bearer(&token)
        .await;
    response.assert_status(StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn monthly_report_rejects_out_of_range_month_with_400() {
    let server = server();
    let token = TokenMint::manager(Uuid::new_v4()).token();
    let response = server
        .get("/api/v1/ai/monthly-report?year=2026&month=13")
        .authorization_bearer(&token)
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["kind"], "INVALID_MONTH");
}

#[tokio::test]
async fn wellness_event_listing_rejects_collaborator_with_403() {
    let server = server();
    let token = TokenMint::collaborator(Uuid::new_v4()).token();
    let response = server
        .get("/api/v1/wellnessevents")
        .authorization_bearer(&token)
        .await;
    response.assert_status(StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn responses_carry_a_generated_request_id() {
    let server = server();
    let response = server.get("/health").await;
    let header = response.header("x-request-id");
    assert!(!header.to_str().unwrap().is_empty());
}

#[tokio::test]
async fn inbound_request_id_is_echoed_back() {
    let server = server();
    let response = server
        .get("/health")
        .add_header(
            HeaderName::from_static("x-request-id"),
            HeaderValue::from_static("corr-42"),
        )
        .await;
    assert_eq!(response.header("x-request-id"), "corr-42");
}
