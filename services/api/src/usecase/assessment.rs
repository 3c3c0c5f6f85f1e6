use chrono::Utc;
use uuid::Uuid;

use wellbeat_domain::level::Level;
use wellbeat_domain::pagination::{PageQuery, PagedResult};

use crate::domain::repository::AssessmentRepository;
use crate::domain::types::{NOTES_MAX_LEN, SelfAssessment};
use crate::error::ApiServiceError;

/// Raw mood/stress/workload ranks plus notes, as they arrive in a request
/// body. Validated into domain values by the usecases below.
pub struct AssessmentInput {
    pub mood: i16,
    pub stress: i16,
    pub workload: i16,
    pub notes: Option<String>,
}

struct ValidatedLevels {
    mood: Level,
    stress: Level,
    workload: Level,
    notes: Option<String>,
}

fn validate(input: AssessmentInput) -> Result<ValidatedLevels, ApiServiceError> {
    let mood = Level::from_rank(input.mood).ok_or(ApiServiceError::InvalidLevel)?;
    let stress = Level::from_rank(input.stress).ok_or(ApiServiceError::InvalidLevel)?;
    let workload = Level::from_rank(input.workload).ok_or(ApiServiceError::InvalidLevel)?;
    if let Some(ref notes) = input.notes {
        if notes.chars().count() > NOTES_MAX_LEN {
            return Err(ApiServiceError::NotesTooLong);
        }
    }
    Ok(ValidatedLevels {
        mood,
        stress,
        workload,
        notes: input.notes,
    })
}

// ── CreateAssessment ─────────────────────────────────────────────────────────

pub struct CreateAssessmentUseCase<R: AssessmentRepository> {
    pub assessments: R,
}

impl<R: AssessmentRepository> CreateAssessmentUseCase<R> {
    pub async fn execute(
        &self,
        owner_id: Uuid,
        input: AssessmentInput,
    ) -> Result<SelfAssessment, ApiServiceError> {
        let v = validate(input)?;
        let assessment = SelfAssessment {
            id: Uuid::now_v7(),
            user_id: owner_id,
            mood: v.mood,
            stress: v.stress,
            workload: v.workload,
            notes: v.notes,
            created_at: Utc::now(),
        };
        self.assessments.create(&assessment).await?;
        Ok(assessment)
    }
}

// ── GetAssessment ────────────────────────────────────────────────────────────

pub struct GetAssessmentUseCase<R: AssessmentRepository> {
    pub assessments: R,
}

impl<R: AssessmentRepository> GetAssessmentUseCase<R> {
    /// Fetch one assessment, owner-scoped. A record owned by someone else
    /// reads as absent — the 404 must not leak existence.
    pub async fn execute(
        &self,
        caller_id: Uuid,
        assessment_id: Uuid,
    ) -> Result<SelfAssessment, ApiServiceError> {
        self.assessments
            .find_by_id(assessment_id)
            .await?
            .filter(|a| a.user_id == caller_id)
            .ok_or(ApiServiceError::AssessmentNotFound)
    }
}

// ── UpdateAssessment ─────────────────────────────────────────────────────────

pub struct UpdateAssessmentUseCase<R: AssessmentRepository> {
    pub assessments: R,
}

impl<R: AssessmentRepository> UpdateAssessmentUseCase<R> {
    pub async fn execute(
        &self,
        caller_id: Uuid,
        assessment_id: Uuid,
        input: AssessmentInput,
    ) -> Result<(), ApiServiceError> {
        let existing = self
            .assessments
            .find_by_id(assessment_id)
            .await?
            .filter(|a| a.user_id == caller_id)
            .ok_or(ApiServiceError::AssessmentNotFound)?;

        let v = validate(input)?;
        let updated = SelfAssessment {
            mood: v.mood,
            stress: v.stress,
            workload: v.workload,
            notes: v.notes,
            ..existing
        };
        self.assessments.update_levels(&updated).await
    }
}

// ── DeleteAssessment ─────────────────────────────────────────────────────────

pub struct DeleteAssessmentUseCase<R: AssessmentRepository> {
    pub assessments: R,
}

impl<R: AssessmentRepository> DeleteAssessmentUseCase<R> {
    pub async fn execute(
        &self,
        caller_id: Uuid,
        assessment_id: Uuid,
    ) -> Result<(), ApiServiceError> {
        // Ownership check first so a foreign record 404s instead of being
        // deleted or leaking existence.
        self.assessments
            .find_by_id(assessment_id)
            .await?
            .filter(|a| a.user_id == caller_id)
            .ok_or(ApiServiceError::AssessmentNotFound)?;

        if !self.assessments.delete(assessment_id).await? {
            return Err(ApiServiceError::AssessmentNotFound);
        }
        Ok(())
    }
}

// ── ListMyAssessments ────────────────────────────────────────────────────────

pub struct ListMyAssessmentsUseCase<R: AssessmentRepository> {
    pub assessments: R,
}

impl<R: AssessmentRepository> ListMyAssessmentsUseCase<R> {
    pub async fn execute(
        &self,
        caller_id: Uuid,
        page: PageQuery,
    ) -> Result<PagedResult<SelfAssessment>, ApiServiceError> {
        let page = page.normalized();
        let (items, total) = self.assessments.list_by_owner(caller_id, page).await?;
        Ok(PagedResult::new(items, page, total))
    }
}
