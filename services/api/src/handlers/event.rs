use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use wellbeat_auth_types::identity::Identity;
use wellbeat_domain::pagination::PageQuery;

use crate::domain::types::{EventFilter, WellnessEvent};
use crate::error::ApiServiceError;
use crate::policy::require_manager;
use crate::state::AppState;
use crate::usecase::event::{CreateEventInput, CreateEventUseCase, ListEventsUseCase};

pub const EVENTS_PATH: &str = "/api/v1/wellnessevents";

// ── Request / response types ─────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    pub user_id: Option<Uuid>,
    pub event_type: String,
    pub occurred_at: Option<DateTime<Utc>>,
    pub source: Option<String>,
    pub value: Option<f64>,
    pub metadata_json: Option<String>,
}

/// Owning user id is exposed here; the listing is manager-only.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventResponse {
    pub id: String,
    pub user_id: Option<String>,
    pub event_type: String,
    #[serde(serialize_with = "wellbeat_core::serde::to_rfc3339_ms")]
    pub occurred_at: DateTime<Utc>,
    pub source: String,
    pub value: Option<f64>,
    pub metadata_json: Option<String>,
    #[serde(serialize_with = "wellbeat_core::serde::to_rfc3339_ms")]
    pub created_at: DateTime<Utc>,
}

impl From<WellnessEvent> for EventResponse {
    fn from(event: WellnessEvent) -> Self {
        Self {
            id: event.id.to_string(),
            user_id: event.user_id.map(|id| id.to_string()),
            event_type: event.event_type,
            occurred_at: event.occurred_at,
            source: event.source,
            value: event.value,
            metadata_json: event.metadata_json,
            created_at: event.created_at,
        }
    }
}

// ── POST /api/v1/wellnessevents ──────────────────────────────────────────────

pub async fn create_event(
    identity: Identity,
    State(state): State<AppState>,
    Json(body): Json<CreateEventRequest>,
) -> Result<impl IntoResponse, ApiServiceError> {
    let usecase = CreateEventUseCase {
        events: state.event_repo(),
    };
    let created = usecase
        .execute(
            identity.user_id,
            CreateEventInput {
                user_id: body.user_id,
                event_type: body.event_type,
                occurred_at: body.occurred_at,
                source: body.source,
                value: body.value,
                metadata_json: body.metadata_json,
            },
        )
        .await?;
    Ok((StatusCode::CREATED, Json(EventResponse::from(created))))
}

// ── GET /api/v1/wellnessevents ───────────────────────────────────────────────

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ListEventsQuery {
    pub page_number: Option<i64>,
    pub page_size: Option<i64>,
    pub user_id: Option<Uuid>,
    pub event_type: Option<String>,
    pub source: Option<String>,
    pub occurred_from: Option<DateTime<Utc>>,
    pub occurred_to: Option<DateTime<Utc>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ListEventsLinkFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    event_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    occurred_from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    occurred_to: Option<String>,
}

pub async fn list_events(
    identity: Identity,
    State(state): State<AppState>,
    Query(query): Query<ListEventsQuery>,
) -> Result<impl IntoResponse, ApiServiceError> {
    require_manager(&identity)?;

    let filter = EventFilter {
        user_id: query.user_id,
        event_type: query.event_type.clone(),
        source: query.source.clone(),
        occurred_from: query.occurred_from,
        occurred_to: query.occurred_to,
    };
    let page = PageQuery {
        page_number: query.page_number.unwrap_or(1),
        page_size: query
            .page_size
            .unwrap_or(wellbeat_domain::pagination::DEFAULT_PAGE_SIZE),
    };

    let usecase = ListEventsUseCase {
        events: state.event_repo(),
    };
    let result = usecase.execute(filter, page).await?;
    let link_filter = ListEventsLinkFilter {
        user_id: query.user_id.map(|id| id.to_string()),
        event_type: query.event_type,
        source: query.source,
        occurred_from: query.occurred_from.map(|t| t.to_rfc3339()),
        occurred_to: query.occurred_to.map(|t| t.to_rfc3339()),
    };
    Ok(Json(
        result
            .map(EventResponse::from)
            .with_links(EVENTS_PATH, &link_filter),
    ))
}
