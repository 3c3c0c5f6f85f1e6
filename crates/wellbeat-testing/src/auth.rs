//! Token minting helpers for tests.

use jsonwebtoken::{EncodingKey, Header, encode};
use uuid::Uuid;

use wellbeat_auth_types::token::{ACCESS_TOKEN_EXP, AuthVerifier, JwtClaims};
use wellbeat_domain::user::UserRole;

pub const TEST_JWT_SECRET: &str = "test-jwt-secret-for-unit-tests-only";
pub const TEST_JWT_ISSUER: &str = "wellbeat-test";
pub const TEST_JWT_AUDIENCE: &str = "wellbeat-test-clients";

/// Verifier matching every token produced by [`TokenMint`].
pub fn test_verifier() -> AuthVerifier {
    AuthVerifier {
        secret: TEST_JWT_SECRET.to_owned(),
        issuer: TEST_JWT_ISSUER.to_owned(),
        audience: TEST_JWT_AUDIENCE.to_owned(),
    }
}

/// Mints access tokens for a configurable identity.
pub struct TokenMint {
    pub user_id: Uuid,
    pub role: UserRole,
    pub email: String,
    pub full_name: String,
}

impl TokenMint {
    pub fn collaborator(user_id: Uuid) -> Self {
        Self {
            user_id,
            role: UserRole::Collaborator,
            email: "collaborator@example.com".to_owned(),
            full_name: "Test Collaborator".to_owned(),
        }
    }

    pub fn manager(user_id: Uuid) -> Self {
        Self {
            user_id,
            role: UserRole::Manager,
            email: "manager@example.com".to_owned(),
            full_name: "Test Manager".to_owned(),
        }
    }

    fn now_secs() -> u64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_secs()
    }

    fn encode_with_exp(&self, issued_at: u64, exp: u64) -> String {
        let claims = JwtClaims {
            sub: self.user_id.to_string(),
            email: self.email.clone(),
            name: self.full_name.clone(),
            role: self.role.name().to_owned(),
            iss: TEST_JWT_ISSUER.to_owned(),
            aud: TEST_JWT_AUDIENCE.to_owned(),
            nbf: issued_at,
            iat: issued_at,
            exp,
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(TEST_JWT_SECRET.as_bytes()),
        )
        .expect("test token encoding")
    }

    /// A currently-valid access token.
    pub fn token(&self) -> String {
        let now = Self::now_secs();
        self.encode_with_exp(now, now + ACCESS_TOKEN_EXP)
    }

    /// A token whose expiry is well in the past (beyond validation leeway).
    pub fn expired_token(&self) -> String {
        let then = Self::now_secs() - 2 * ACCESS_TOKEN_EXP;
        self.encode_with_exp(then, then + 1)
    }
}
