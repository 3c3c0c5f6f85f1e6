#![allow(async_fn_in_trait)]

use chrono::{DateTime, Utc};
use uuid::Uuid;

use wellbeat_domain::pagination::PageQuery;

use crate::domain::types::{
    EventFilter, Recommendation, SelfAssessment, User, UserFilter, WellnessEvent,
};
use crate::error::ApiServiceError;

/// Repository for user accounts.
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, ApiServiceError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiServiceError>;
    async fn create(&self, user: &User) -> Result<(), ApiServiceError>;

    /// Flip the active flag. Returns `false` when no such user exists.
    async fn set_active(&self, id: Uuid, is_active: bool) -> Result<bool, ApiServiceError>;

    /// One page of users plus the total filtered count.
    ///
    /// `page` must be normalized. Ordering is `created_at, id` ascending so
    /// page boundaries stay stable under concurrent inserts.
    async fn list(
        &self,
        filter: &UserFilter,
        page: PageQuery,
    ) -> Result<(Vec<User>, i64), ApiServiceError>;
}

/// Repository for self-assessments.
pub trait AssessmentRepository: Send + Sync {
    async fn create(&self, assessment: &SelfAssessment) -> Result<(), ApiServiceError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<SelfAssessment>, ApiServiceError>;

    /// Overwrite mood/stress/workload/notes. `created_at` is immutable.
    async fn update_levels(&self, assessment: &SelfAssessment) -> Result<(), ApiServiceError>;

    /// Delete by id. Returns `true` if a row was deleted.
    async fn delete(&self, id: Uuid) -> Result<bool, ApiServiceError>;

    /// One page of the owner's assessments, newest first, plus the total
    /// count. `page` must be normalized; ties broken by `id` descending.
    async fn list_by_owner(
        &self,
        user_id: Uuid,
        page: PageQuery,
    ) -> Result<(Vec<SelfAssessment>, i64), ApiServiceError>;

    /// All assessments created on or after `cutoff`, any owner.
    async fn list_created_since(
        &self,
        cutoff: DateTime<Utc>,
    ) -> Result<Vec<SelfAssessment>, ApiServiceError>;

    /// All assessments created in the half-open range `[from, to)`.
    async fn list_created_between(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<SelfAssessment>, ApiServiceError>;

    /// One user's assessments created on or after `cutoff`, newest first,
    /// capped at `limit` rows when given.
    async fn list_recent_for_user(
        &self,
        user_id: Uuid,
        cutoff: DateTime<Utc>,
        limit: Option<u64>,
    ) -> Result<Vec<SelfAssessment>, ApiServiceError>;
}

/// Repository for wellness events. Append-only: no update or delete.
pub trait EventRepository: Send + Sync {
    async fn create(&self, event: &WellnessEvent) -> Result<(), ApiServiceError>;

    /// One page of events matching the filter, newest occurrence first,
    /// plus the total filtered count. `page` must be normalized.
    async fn list(
        &self,
        filter: &EventFilter,
        page: PageQuery,
    ) -> Result<(Vec<WellnessEvent>, i64), ApiServiceError>;
}

/// Capability producing personalized recommendations for one user.
///
/// Both the provider-backed and the rule-based generators implement this,
/// so callers never branch on the mode. Implementations recover every
/// provider-side failure into the returned list (≥ 1 item); the only `Err`
/// path is a store failure.
pub trait RecommendationEngine: Send + Sync {
    async fn recommendations_for(
        &self,
        user_id: Uuid,
        as_of: DateTime<Utc>,
    ) -> Result<Vec<Recommendation>, ApiServiceError>;
}
