use chrono::Utc;
use uuid::Uuid;

use wellbeat_domain::pagination::{PageQuery, PagedResult};

use crate::domain::repository::EventRepository;
use crate::domain::types::{EventFilter, WellnessEvent};
use crate::error::ApiServiceError;

/// Source recorded when the producer does not name one.
pub const DEFAULT_EVENT_SOURCE: &str = "unknown";

// ── CreateEvent ──────────────────────────────────────────────────────────────

pub struct CreateEventInput {
    pub user_id: Option<Uuid>,
    pub event_type: String,
    pub occurred_at: Option<chrono::DateTime<Utc>>,
    pub source: Option<String>,
    pub value: Option<f64>,
    pub metadata_json: Option<String>,
}

pub struct CreateEventUseCase<R: EventRepository> {
    pub events: R,
}

impl<R: EventRepository> CreateEventUseCase<R> {
    /// Ingest one event. An explicit `user_id` in the body wins; otherwise
    /// the event is attributed to the authenticated caller.
    pub async fn execute(
        &self,
        caller_id: Uuid,
        input: CreateEventInput,
    ) -> Result<WellnessEvent, ApiServiceError> {
        let event_type = input.event_type.trim().to_owned();
        if event_type.is_empty() {
            return Err(ApiServiceError::MissingEventType);
        }

        let now = Utc::now();
        let event = WellnessEvent {
            id: Uuid::now_v7(),
            user_id: input.user_id.or(Some(caller_id)),
            event_type,
            occurred_at: input.occurred_at.unwrap_or(now),
            source: input
                .source
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_EVENT_SOURCE.to_owned()),
            value: input.value,
            metadata_json: input.metadata_json,
            created_at: now,
        };
        self.events.create(&event).await?;
        Ok(event)
    }
}

// ── ListEvents ───────────────────────────────────────────────────────────────

pub struct ListEventsUseCase<R: EventRepository> {
    pub events: R,
}

impl<R: EventRepository> ListEventsUseCase<R> {
    pub async fn execute(
        &self,
        filter: EventFilter,
        page: PageQuery,
    ) -> Result<PagedResult<WellnessEvent>, ApiServiceError> {
        let page = page.normalized();
        let (items, total) = self.events.list(&filter, page).await?;
        Ok(PagedResult::new(items, page, total))
    }
}
