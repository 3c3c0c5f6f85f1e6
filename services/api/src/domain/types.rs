//! Domain types owned by the API service.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use wellbeat_domain::level::Level;
use wellbeat_domain::user::UserRole;

/// Maximum length of free-text assessment notes, in characters.
pub const NOTES_MAX_LEN: usize = 1000;

/// User account. `password_hash` is an argon2 PHC string and never leaves
/// the service.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Self-reported mood/stress/workload assessment owned by exactly one user.
#[derive(Debug, Clone, PartialEq)]
pub struct SelfAssessment {
    pub id: Uuid,
    pub user_id: Uuid,
    pub mood: Level,
    pub stress: Level,
    pub workload: Level,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Append-only wellness event, optionally attributed to a user.
#[derive(Debug, Clone, PartialEq)]
pub struct WellnessEvent {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub event_type: String,
    pub occurred_at: DateTime<Utc>,
    pub source: String,
    pub value: Option<f64>,
    pub metadata_json: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// One personalized recommendation. `category` is an open vocabulary;
/// locally-produced values are the `category::*` constants below.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Recommendation {
    pub title: String,
    pub description: String,
    pub category: String,
}

/// Categories attached to locally-generated recommendations.
pub mod category {
    pub const ONBOARDING: &str = "onboarding";
    pub const GENERAL_ADVICE: &str = "general_advice";
    pub const DIAGNOSTIC: &str = "diagnostic";
    pub const STRESS_MANAGEMENT: &str = "stress_management";
    pub const WORKLOAD: &str = "workload";
    pub const EMOTIONAL_HEALTH: &str = "emotional_health";
    pub const MAINTENANCE: &str = "maintenance";
}

/// Filters for the manager-only user listing.
#[derive(Debug, Clone, Copy, Default)]
pub struct UserFilter {
    pub role: Option<UserRole>,
    pub is_active: Option<bool>,
}

/// Filters for the manager-only wellness-event listing.
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    pub user_id: Option<Uuid>,
    pub event_type: Option<String>,
    pub source: Option<String>,
    pub occurred_from: Option<DateTime<Utc>>,
    pub occurred_to: Option<DateTime<Utc>>,
}
