use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// API service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum ApiServiceError {
    #[error("unauthenticated")]
    Unauthenticated,
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("forbidden")]
    Forbidden,
    #[error("user not found")]
    UserNotFound,
    #[error("assessment not found")]
    AssessmentNotFound,
    #[error("email already registered")]
    EmailTaken,
    #[error("invalid role")]
    InvalidRole,
    #[error("level rank out of range 1-5")]
    InvalidLevel,
    #[error("month out of range 1-12")]
    InvalidMonth,
    #[error("event type is required")]
    MissingEventType,
    #[error("notes exceed the allowed length")]
    NotesTooLong,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl ApiServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Unauthenticated => "UNAUTHENTICATED",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::Forbidden => "FORBIDDEN",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::AssessmentNotFound => "ASSESSMENT_NOT_FOUND",
            Self::EmailTaken => "EMAIL_TAKEN",
            Self::InvalidRole => "INVALID_ROLE",
            Self::InvalidLevel => "INVALID_LEVEL",
            Self::InvalidMonth => "INVALID_MONTH",
            Self::MissingEventType => "MISSING_EVENT_TYPE",
            Self::NotesTooLong => "NOTES_TOO_LONG",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for ApiServiceError {
    fn into_response(self) -> Response {
        // Internal failures get the uniform problem-details body with a
        // generated trace id; the error chain is only logged server-side.
        if let Self::Internal(ref e) = self {
            return wellbeat_core::error::internal_error_response(e);
        }
        let status = match &self {
            Self::Unauthenticated | Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::UserNotFound | Self::AssessmentNotFound => StatusCode::NOT_FOUND,
            Self::EmailTaken => StatusCode::CONFLICT,
            Self::InvalidRole
            | Self::InvalidLevel
            | Self::InvalidMonth
            | Self::MissingEventType
            | Self::NotesTooLong => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use axum::response::IntoResponse;

    async fn assert_error(
        error: ApiServiceError,
        expected_status: StatusCode,
        expected_kind: &str,
        expected_message: &str,
    ) {
        let resp = error.into_response();
        assert_eq!(resp.status(), expected_status);
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["kind"], expected_kind);
        assert_eq!(json["message"], expected_message);
    }

    #[tokio::test]
    async fn should_return_unauthenticated() {
        assert_error(
            ApiServiceError::Unauthenticated,
            StatusCode::UNAUTHORIZED,
            "UNAUTHENTICATED",
            "unauthenticated",
        )
        .await;
    }

    #[tokio::test]
    async fn should_return_invalid_credentials_as_401() {
        assert_error(
            ApiServiceError::InvalidCredentials,
            StatusCode::UNAUTHORIZED,
            "INVALID_CREDENTIALS",
            "invalid credentials",
        )
        .await;
    }

    #[tokio::test]
    async fn should_return_forbidden() {
        assert_error(
            ApiServiceError::Forbidden,
            StatusCode::FORBIDDEN,
            "FORBIDDEN",
            "forbidden",
        )
        .await;
    }

    #[tokio::test]
    async fn should_return_user_not_found() {
        assert_error(
            ApiServiceError::UserNotFound,
            StatusCode::NOT_FOUND,
            "USER_NOT_FOUND",
            "user not found",
        )
        .await;
    }

    #[tokio::test]
    async fn should_return_assessment_not_found() {
        assert_error(
            ApiServiceError::AssessmentNotFound,
            StatusCode::NOT_FOUND,
            "ASSESSMENT_NOT_FOUND",
            "assessment not found",
        )
        .await;
    }

    #[tokio::test]
    async fn should_return_email_taken_as_conflict() {
        assert_error(
            ApiServiceError::EmailTaken,
            StatusCode::CONFLICT,
            "EMAIL_TAKEN",
            "email already registered",
        )
        .await;
    }

    #[tokio::test]
    async fn should_return_invalid_role_as_bad_request() {
        assert_error(
            ApiServiceError::InvalidRole,
            StatusCode::BAD_REQUEST,
            "INVALID_ROLE",
            "invalid role",
        )
        .await;
    }

    #[tokio::test]
    async fn should_return_invalid_month_as_bad_request() {
        assert_error(
            ApiServiceError::InvalidMonth,
            StatusCode::BAD_REQUEST,
            "INVALID_MONTH",
            "month out of range 1-12",
        )
        .await;
    }

    #[tokio::test]
    async fn should_return_internal_as_problem_details() {
        let resp = ApiServiceError::Internal(anyhow::anyhow!("db error")).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["status"], 500);
        assert_eq!(json["title"], "Internal Server Error");
        assert!(json["traceId"].is_string());
        // Raw error text stays server-side.
        assert_eq!(json["detail"], "an unexpected error occurred");
    }
}
