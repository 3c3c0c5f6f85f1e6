use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use wellbeat_domain::user::UserRole;

use crate::error::ApiServiceError;
use crate::state::AppState;
use crate::usecase::auth::{LoginInput, LoginUseCase, RegisterUserInput, RegisterUserUseCase};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    pub full_name: String,
    pub role: UserRole,
}

// ── POST /api/v1/auth/register ───────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub role: String,
}

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<Json<AuthResponse>, ApiServiceError> {
    let usecase = RegisterUserUseCase {
        users: state.user_repo(),
        auth: state.verifier.clone(),
    };
    let out = usecase
        .execute(RegisterUserInput {
            full_name: body.full_name,
            email: body.email,
            password: body.password,
            role: body.role,
        })
        .await?;
    Ok(Json(AuthResponse {
        token: out.token,
        full_name: out.full_name,
        role: out.role,
    }))
}

// ── POST /api/v1/auth/login ──────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiServiceError> {
    let usecase = LoginUseCase {
        users: state.user_repo(),
        auth: state.verifier.clone(),
    };
    let out = usecase
        .execute(LoginInput {
            email: body.email,
            password: body.password,
        })
        .await?;
    Ok(Json(AuthResponse {
        token: out.token,
        full_name: out.full_name,
        role: out.role,
    }))
}
