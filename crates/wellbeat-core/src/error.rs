use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use uuid::Uuid;

/// Body returned for every unhandled internal failure.
///
/// The full error chain is logged server-side under the same trace id;
/// clients only ever see the safe summary in `detail`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    pub problem_type: String,
    pub title: String,
    pub status: u16,
    pub trace_id: String,
    pub detail: String,
}

/// Map an internal error to a uniform 500 response.
///
/// Generates a fresh trace id, logs the error chain with it, and returns
/// the problem-details body carrying only the safe summary.
pub fn internal_error_response(error: &anyhow::Error) -> Response {
    let trace_id = Uuid::new_v4().to_string();
    tracing::error!(error = %format!("{error:#}"), trace_id = %trace_id, "internal error");
    let body = ProblemDetails {
        problem_type: "about:blank".to_owned(),
        title: "Internal Server Error".to_owned(),
        status: StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
        trace_id,
        detail: "an unexpected error occurred".to_owned(),
    };
    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}
