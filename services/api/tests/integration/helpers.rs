use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use uuid::Uuid;

use wellbeat_api::domain::repository::{AssessmentRepository, UserRepository};
use wellbeat_api::domain::types::{SelfAssessment, User, UserFilter};
use wellbeat_api::error::ApiServiceError;
use wellbeat_api::state::{AiSettings, AppState};
use wellbeat_domain::pagination::PageQuery;
use wellbeat_testing::auth::test_verifier;

// ── InMemoryUsers ────────────────────────────────────────────────────────────

/// Shareable user store; clones see the same data.
#[derive(Clone, Default)]
pub struct InMemoryUsers {
    users: Arc<Mutex<Vec<User>>>,
}

impl UserRepository for InMemoryUsers {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, ApiServiceError> {
        Ok(self.users.lock().unwrap().iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiServiceError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn create(&self, user: &User) -> Result<(), ApiServiceError> {
        self.users.lock().unwrap().push(user.clone());
        Ok(())
    }

    async fn set_active(&self, id: Uuid, is_active: bool) -> Result<bool, ApiServiceError> {
        let mut users = self.users.lock().unwrap();
        match users.iter_mut().find(|u| u.id == id) {
            Some(u) => {
                u.is_active = is_active;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn list(
        &self,
        filter: &UserFilter,
        page: PageQuery,
    ) -> Result<(Vec<User>, i64), ApiServiceError> {
        let users = self.users.lock().unwrap();
        let matching: Vec<User> = users
            .iter()
            .filter(|u| filter.role.is_none_or(|r| u.role == r))
            .filter(|u| filter.is_active.is_none_or(|a| u.is_active == a))
            .cloned()
            .collect();
        let total = matching.len() as i64;
        let items = matching
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.page_size as usize)
            .collect();
        Ok((items, total))
    }
}

// ── InMemoryAssessments ──────────────────────────────────────────────────────

/// Shareable assessment store mirroring the DB repository's ordering:
/// owner listings come back newest first with `id` as tiebreaker.
#[derive(Clone, Default)]
pub struct InMemoryAssessments {
    assessments: Arc<Mutex<Vec<SelfAssessment>>>,
}

impl AssessmentRepository for InMemoryAssessments {
    async fn create(&self, assessment: &SelfAssessment) -> Result<(), ApiServiceError> {
        self.assessments.lock().unwrap().push(assessment.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<SelfAssessment>, ApiServiceError> {
        Ok(self
            .assessments
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.id == id)
            .cloned())
    }

    async fn update_levels(&self, assessment: &SelfAssessment) -> Result<(), ApiServiceError> {
        let mut assessments = self.assessments.lock().unwrap();
        if let Some(a) = assessments.iter_mut().find(|a| a.id == assessment.id) {
            *a = assessment.clone();
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ApiServiceError> {
        let mut assessments = self.assessments.lock().unwrap();
        let before = assessments.len();
        assessments.retain(|a| a.id != id);
        Ok(assessments.len() < before)
    }

    async fn list_by_owner(
        &self,
        user_id: Uuid,
        page: PageQuery,
    ) -> Result<(Vec<SelfAssessment>, i64), ApiServiceError> {
        let mut matching: Vec<SelfAssessment> = self
            .assessments
            .lock()
            .unwrap()
            .iter()
            .filter(|a| a.user_id == user_id)
            .cloned()
            .collect();
        matching.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        let total = matching.len() as i64;
        let items = matching
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.page_size as usize)
            .collect();
        Ok((items, total))
    }

    async fn list_created_since(
        &self,
        cutoff: DateTime<Utc>,
    ) -> Result<Vec<SelfAssessment>, ApiServiceError> {
        Ok(self
            .assessments
            .lock()
            .unwrap()
            .iter()
            .filter(|a| a.created_at >= cutoff)
            .cloned()
            .collect())
    }

    async fn list_created_between(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<SelfAssessment>, ApiServiceError> {
        Ok(self
            .assessments
            .lock()
            .unwrap()
            .iter()
            .filter(|a| a.created_at >= from && a.created_at < to)
            .cloned()
            .collect())
    }

    async fn list_recent_for_user(
        &self,
        user_id: Uuid,
        cutoff: DateTime<Utc>,
        limit: Option<u64>,
    ) -> Result<Vec<SelfAssessment>, ApiServiceError> {
        let mut matching: Vec<SelfAssessment> = self
            .assessments
            .lock()
            .unwrap()
            .iter()
            .filter(|a| a.user_id == user_id && a.created_at >= cutoff)
            .cloned()
            .collect();
        matching.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        if let Some(limit) = limit {
            matching.truncate(limit as usize);
        }
        Ok(matching)
    }
}

// ── Router fixtures ──────────────────────────────────────────────────────────

/// State for router-level tests: disconnected store, test JWT parameters,
/// no provider key. Routes exercised through it must reject before touching
/// the database.
pub fn test_state() -> AppState {
    AppState {
        db: sea_orm::DatabaseConnection::default(),
        verifier: test_verifier(),
        ai: AiSettings {
            api_key: None,
            base_url: "https://provider.invalid".to_owned(),
            model: "test-model".to_owned(),
        },
        http: reqwest::Client::new(),
    }
}
