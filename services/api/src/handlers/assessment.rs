use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use wellbeat_auth_types::identity::Identity;
use wellbeat_domain::level::Level;
use wellbeat_domain::links::NoFilter;
use wellbeat_domain::pagination::PageQuery;

use crate::domain::types::SelfAssessment;
use crate::error::ApiServiceError;
use crate::state::AppState;
use crate::usecase::assessment::{
    AssessmentInput, CreateAssessmentUseCase, DeleteAssessmentUseCase, GetAssessmentUseCase,
    ListMyAssessmentsUseCase, UpdateAssessmentUseCase,
};

pub const ASSESSMENTS_PATH: &str = "/api/v1/selfassessments";
pub const MY_ASSESSMENTS_PATH: &str = "/api/v1/selfassessments/my";

// ── Request / response types ─────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentRequest {
    pub mood: i16,
    pub stress: i16,
    pub workload: i16,
    pub notes: Option<String>,
}

impl From<AssessmentRequest> for AssessmentInput {
    fn from(body: AssessmentRequest) -> Self {
        Self {
            mood: body.mood,
            stress: body.stress,
            workload: body.workload,
            notes: body.notes,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResponse {
    pub id: String,
    pub user_id: String,
    pub mood: Level,
    pub stress: Level,
    pub workload: Level,
    pub notes: Option<String>,
    #[serde(serialize_with = "wellbeat_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<SelfAssessment> for AssessmentResponse {
    fn from(assessment: SelfAssessment) -> Self {
        Self {
            id: assessment.id.to_string(),
            user_id: assessment.user_id.to_string(),
            mood: assessment.mood,
            stress: assessment.stress,
            workload: assessment.workload,
            notes: assessment.notes,
            created_at: assessment.created_at,
        }
    }
}

// ── POST /api/v1/selfassessments ─────────────────────────────────────────────

pub async fn create_assessment(
    identity: Identity,
    State(state): State<AppState>,
    Json(body): Json<AssessmentRequest>,
) -> Result<impl IntoResponse, ApiServiceError> {
    let usecase = CreateAssessmentUseCase {
        assessments: state.assessment_repo(),
    };
    let created = usecase.execute(identity.user_id, body.into()).await?;
    let location = format!("{ASSESSMENTS_PATH}/{}", created.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(AssessmentResponse::from(created)),
    ))
}

// ── GET /api/v1/selfassessments/my ───────────────────────────────────────────

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PageParams {
    pub page_number: Option<i64>,
    pub page_size: Option<i64>,
}

impl PageParams {
    fn page(&self) -> PageQuery {
        PageQuery {
            page_number: self.page_number.unwrap_or(1),
            page_size: self
                .page_size
                .unwrap_or(wellbeat_domain::pagination::DEFAULT_PAGE_SIZE),
        }
    }
}

pub async fn get_my_assessments(
    identity: Identity,
    State(state): State<AppState>,
    Query(query): Query<PageParams>,
) -> Result<impl IntoResponse, ApiServiceError> {
    let usecase = ListMyAssessmentsUseCase {
        assessments: state.assessment_repo(),
    };
    let result = usecase.execute(identity.user_id, query.page()).await?;
    Ok(Json(
        result
            .map(AssessmentResponse::from)
            .with_links(MY_ASSESSMENTS_PATH, &NoFilter {}),
    ))
}

// ── GET /api/v1/selfassessments/{id} ─────────────────────────────────────────

pub async fn get_assessment(
    identity: Identity,
    State(state): State<AppState>,
    Path(assessment_id): Path<Uuid>,
) -> Result<Json<AssessmentResponse>, ApiServiceError> {
    let usecase = GetAssessmentUseCase {
        assessments: state.assessment_repo(),
    };
    let assessment = usecase.execute(identity.user_id, assessment_id).await?;
    Ok(Json(AssessmentResponse::from(assessment)))
}

// ── PUT /api/v1/selfassessments/{id} ─────────────────────────────────────────

pub async fn update_assessment(
    identity: Identity,
    State(state): State<AppState>,
    Path(assessment_id): Path<Uuid>,
    Json(body): Json<AssessmentRequest>,
) -> Result<StatusCode, ApiServiceError> {
    let usecase = UpdateAssessmentUseCase {
        assessments: state.assessment_repo(),
    };
    usecase
        .execute(identity.user_id, assessment_id, body.into())
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── DELETE /api/v1/selfassessments/{id} ──────────────────────────────────────

pub async fn delete_assessment(
    identity: Identity,
    State(state): State<AppState>,
    Path(assessment_id): Path<Uuid>,
) -> Result<StatusCode, ApiServiceError> {
    let usecase = DeleteAssessmentUseCase {
        assessments: state.assessment_repo(),
    };
    usecase.execute(identity.user_id, assessment_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
