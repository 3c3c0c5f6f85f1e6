use std::time::{SystemTime, UNIX_EPOCH};

use argon2::Argon2;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use chrono::Utc;
use jsonwebtoken::{EncodingKey, Header, encode};
use uuid::Uuid;

use wellbeat_auth_types::token::{ACCESS_TOKEN_EXP, AuthVerifier, JwtClaims};
use wellbeat_domain::user::UserRole;

use crate::domain::repository::UserRepository;
use crate::domain::types::User;
use crate::error::ApiServiceError;

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock before UNIX epoch")
        .as_secs()
}

/// Hash a plaintext password into an argon2 PHC string.
pub fn hash_password(plain: &str) -> Result<String, ApiServiceError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map_err(|e| ApiServiceError::Internal(anyhow::anyhow!("hash password: {e}")))?;
    Ok(hash.to_string())
}

/// Check a plaintext password against a stored PHC string.
///
/// An unparseable stored hash counts as a mismatch, not an error — login
/// must not leak storage problems to the caller.
pub fn verify_password(hash: &str, plain: &str) -> bool {
    PasswordHash::new(hash)
        .map(|parsed| {
            Argon2::default()
                .verify_password(plain.as_bytes(), &parsed)
                .is_ok()
        })
        .unwrap_or(false)
}

/// Issue a signed access token for a verified user.
///
/// Claims carry the subject (user id), email, full name, role, and the
/// process-wide issuer/audience. Not-before is issuance time; expiry is
/// issuance + [`ACCESS_TOKEN_EXP`].
pub fn issue_access_token(user: &User, auth: &AuthVerifier) -> Result<String, ApiServiceError> {
    let now = now_secs();
    let claims = JwtClaims {
        sub: user.id.to_string(),
        email: user.email.clone(),
        name: user.full_name.clone(),
        role: user.role.name().to_owned(),
        iss: auth.issuer.clone(),
        aud: auth.audience.clone(),
        nbf: now,
        iat: now,
        exp: now + ACCESS_TOKEN_EXP,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(auth.secret.as_bytes()),
    )
    .map_err(|e| ApiServiceError::Internal(e.into()))
}

/// Token + profile snapshot returned by register and login.
#[derive(Debug)]
pub struct AuthOutput {
    pub token: String,
    pub full_name: String,
    pub role: UserRole,
}

// ── RegisterUser ─────────────────────────────────────────────────────────────

pub struct RegisterUserInput {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub role: String,
}

pub struct RegisterUserUseCase<R: UserRepository> {
    pub users: R,
    pub auth: AuthVerifier,
}

impl<R: UserRepository> RegisterUserUseCase<R> {
    pub async fn execute(&self, input: RegisterUserInput) -> Result<AuthOutput, ApiServiceError> {
        let role = UserRole::parse_name(&input.role).ok_or(ApiServiceError::InvalidRole)?;
        if self.users.find_by_email(&input.email).await?.is_some() {
            return Err(ApiServiceError::EmailTaken);
        }
        let user = User {
            id: Uuid::now_v7(),
            full_name: input.full_name,
            email: input.email,
            password_hash: hash_password(&input.password)?,
            role,
            is_active: true,
            created_at: Utc::now(),
        };
        self.users.create(&user).await?;
        let token = issue_access_token(&user, &self.auth)?;
        Ok(AuthOutput {
            token,
            full_name: user.full_name,
            role,
        })
    }
}

// ── Login ────────────────────────────────────────────────────────────────────

pub struct LoginInput {
    pub email: String,
    pub password: String,
}

pub struct LoginUseCase<R: UserRepository> {
    pub users: R,
    pub auth: AuthVerifier,
}

impl<R: UserRepository> LoginUseCase<R> {
    pub async fn execute(&self, input: LoginInput) -> Result<AuthOutput, ApiServiceError> {
        // Unknown, inactive, and wrong-password all collapse into the same
        // 401 so the endpoint doesn't reveal which emails exist.
        let user = self
            .users
            .find_by_email(&input.email)
            .await?
            .filter(|u| u.is_active)
            .ok_or(ApiServiceError::InvalidCredentials)?;

        if !verify_password(&user.password_hash, &input.password) {
            return Err(ApiServiceError::InvalidCredentials);
        }

        let token = issue_access_token(&user, &self.auth)?;
        Ok(AuthOutput {
            token,
            full_name: user.full_name,
            role: user.role,
        })
    }
}
