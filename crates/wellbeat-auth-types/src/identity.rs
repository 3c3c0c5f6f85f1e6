//! Bearer-token identity extractor.

use axum::Json;
use axum::extract::{FromRef, FromRequestParts};
use axum::response::{IntoResponse, Response};
use axum_extra::headers::authorization::Bearer;
use axum_extra::headers::{Authorization, HeaderMapExt};
use http::StatusCode;
use http::request::Parts;
use uuid::Uuid;

use wellbeat_domain::user::UserRole;

use crate::token::{AuthError, AuthVerifier};

/// Caller identity resolved from the `Authorization: Bearer` header.
///
/// Extraction rejects with 401 when the header is absent or the token fails
/// validation. Role enforcement (403) is done by the authorization policy
/// after extraction.
#[derive(Debug, Clone)]
pub struct Identity {
    pub user_id: Uuid,
    pub role: UserRole,
}

/// Rejection produced when no valid identity can be extracted.
#[derive(Debug, thiserror::Error)]
pub enum IdentityRejection {
    #[error("missing bearer token")]
    MissingToken,
    #[error(transparent)]
    Token(#[from] AuthError),
}

impl IntoResponse for IdentityRejection {
    fn into_response(self) -> Response {
        let body = serde_json::json!({
            "kind": "UNAUTHENTICATED",
            "message": self.to_string(),
        });
        (StatusCode::UNAUTHORIZED, Json(body)).into_response()
    }
}

impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
    AuthVerifier: FromRef<S>,
{
    type Rejection = IdentityRejection;

    // axum-core defines this as `fn -> impl Future + Send` (not `async fn`).
    // With Rust 1.82+ precise capturing, `async fn` captures lifetimes
    // differently, causing E0195. Extract synchronously, return a 'static
    // async move block.
    fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let verifier = AuthVerifier::from_ref(state);
        let bearer = parts.headers.typed_get::<Authorization<Bearer>>();

        async move {
            let bearer = bearer.ok_or(IdentityRejection::MissingToken)?;
            let info = verifier.verify(bearer.token())?;
            Ok(Self {
                user_id: info.user_id,
                role: info.role,
            })
        }
    }
}
