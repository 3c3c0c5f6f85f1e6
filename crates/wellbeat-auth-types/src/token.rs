//! JWT access-token validation.

use jsonwebtoken::{DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use wellbeat_domain::user::UserRole;

/// Access-token lifetime in seconds (8 hours).
pub const ACCESS_TOKEN_EXP: u64 = 28800;

/// Caller identity extracted from a validated access token.
#[derive(Debug, Clone)]
pub struct TokenInfo {
    pub user_id: Uuid,
    pub role: UserRole,
    pub email: String,
    pub full_name: String,
    pub expires_at: u64,
}

/// Errors returned by [`AuthVerifier::verify`].
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("invalid signature")]
    InvalidSignature,
    #[error("token expired")]
    Expired,
    #[error("issuer or audience rejected")]
    Rejected,
    #[error("malformed token")]
    Malformed,
}

/// JWT claims payload shared by token issuance (login/register) and
/// validation (every protected request).
///
/// # Fields
///
/// | Field | JWT claim | Meaning |
/// |-------|-----------|---------|
/// | `sub` | `sub` | user ID (UUID string) |
/// | `email` | custom | account email |
/// | `name` | custom | full name |
/// | `role` | custom | `"Collaborator"` / `"Manager"` |
/// | `iss` / `aud` | `iss` / `aud` | process-wide issuer and audience |
/// | `nbf` / `iat` / `exp` | standard | issuance and expiry, seconds since epoch |
#[derive(Debug, Serialize, Deserialize)]
pub struct JwtClaims {
    pub sub: String,
    pub email: String,
    pub name: String,
    pub role: String,
    pub iss: String,
    pub aud: String,
    pub nbf: u64,
    pub iat: u64,
    pub exp: u64,
}

/// Process-wide token verification parameters: HS256 secret plus the
/// issuer and audience strings every token must carry.
///
/// Constructed once at startup from config and shared through application
/// state; business logic never reads these from the environment.
#[derive(Debug, Clone)]
pub struct AuthVerifier {
    pub secret: String,
    pub issuer: String,
    pub audience: String,
}

impl AuthVerifier {
    /// Decode and validate an access token, returning the caller identity.
    ///
    /// Validation: HS256, exp + nbf checked, issuer and audience matched
    /// against the configured values, required claims `exp` + `sub`.
    /// Default leeway = 60s tolerates clock skew between hosts.
    pub fn verify(&self, token: &str) -> Result<TokenInfo, AuthError> {
        let mut validation = Validation::new(jsonwebtoken::Algorithm::HS256);
        validation.validate_exp = true;
        validation.validate_nbf = true;
        validation.set_issuer(&[&self.issuer]);
        validation.set_audience(&[&self.audience]);
        validation.required_spec_claims.clear();
        validation.set_required_spec_claims(&["exp", "sub"]);

        let data = decode::<JwtClaims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &validation,
        )
        .map_err(|e| match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::Expired,
            jsonwebtoken::errors::ErrorKind::InvalidSignature => AuthError::InvalidSignature,
            jsonwebtoken::errors::ErrorKind::InvalidIssuer
            | jsonwebtoken::errors::ErrorKind::InvalidAudience
            | jsonwebtoken::errors::ErrorKind::ImmatureSignature => AuthError::Rejected,
            _ => AuthError::Malformed,
        })?;

        let claims = data.claims;
        let user_id = claims.sub.parse::<Uuid>().map_err(|_| AuthError::Malformed)?;
        let role = UserRole::parse_name(&claims.role).ok_or(AuthError::Malformed)?;
        Ok(TokenInfo {
            user_id,
            role,
            email: claims.email,
            full_name: claims.name,
            expires_at: claims.exp,
        })
    }
}
