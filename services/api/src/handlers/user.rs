use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use wellbeat_auth_types::identity::Identity;
use wellbeat_domain::pagination::{PageQuery, PagedResult};
use wellbeat_domain::user::UserRole;

use crate::domain::types::{User, UserFilter};
use crate::error::ApiServiceError;
use crate::policy::require_manager;
use crate::state::AppState;
use crate::usecase::user::{GetProfileUseCase, ListUsersUseCase, SetUserStatusUseCase};

pub const USERS_PATH: &str = "/api/v1/users";

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub role: UserRole,
    pub is_active: bool,
    #[serde(serialize_with = "wellbeat_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            full_name: user.full_name,
            email: user.email,
            role: user.role,
            is_active: user.is_active,
            created_at: user.created_at,
        }
    }
}

// ── GET /api/v1/users/me ─────────────────────────────────────────────────────

pub async fn get_me(
    identity: Identity,
    State(state): State<AppState>,
) -> Result<Json<UserResponse>, ApiServiceError> {
    let usecase = GetProfileUseCase {
        users: state.user_repo(),
    };
    let user = usecase.execute(identity.user_id).await?;
    Ok(Json(UserResponse::from(user)))
}

// ── GET /api/v1/users ────────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ListUsersQuery {
    pub page_number: Option<i64>,
    pub page_size: Option<i64>,
    pub role: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ListUsersLinkFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    is_active: Option<bool>,
}

pub async fn list_users(
    identity: Identity,
    State(state): State<AppState>,
    Query(query): Query<ListUsersQuery>,
) -> Result<Json<PagedResult<UserResponse>>, ApiServiceError> {
    require_manager(&identity)?;

    let role = query
        .role
        .as_deref()
        .map(|r| UserRole::parse_name(r).ok_or(ApiServiceError::InvalidRole))
        .transpose()?;
    let filter = UserFilter {
        role,
        is_active: query.is_active,
    };
    let page = PageQuery {
        page_number: query.page_number.unwrap_or(1),
        page_size: query
            .page_size
            .unwrap_or(wellbeat_domain::pagination::DEFAULT_PAGE_SIZE),
    };

    let usecase = ListUsersUseCase {
        users: state.user_repo(),
    };
    let result = usecase.execute(filter, page).await?;
    let link_filter = ListUsersLinkFilter {
        role: role.map(|r| r.name().to_owned()),
        is_active: query.is_active,
    };
    Ok(Json(
        result
            .map(UserResponse::from)
            .with_links(USERS_PATH, &link_filter),
    ))
}

// ── PUT /api/v1/users/{id}/status ────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetUserStatusRequest {
    pub is_active: bool,
}

pub async fn set_user_status(
    identity: Identity,
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(body): Json<SetUserStatusRequest>,
) -> Result<StatusCode, ApiServiceError> {
    require_manager(&identity)?;

    let usecase = SetUserStatusUseCase {
        users: state.user_repo(),
    };
    usecase.execute(user_id, body.is_active).await?;
    Ok(StatusCode::NO_CONTENT)
}
