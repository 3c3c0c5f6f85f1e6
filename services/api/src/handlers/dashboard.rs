use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use wellbeat_auth_types::identity::Identity;

use crate::error::ApiServiceError;
use crate::policy::require_manager;
use crate::state::AppState;
use crate::usecase::dashboard::{
    DashboardSummary, DashboardSummaryUseCase, MonthlyReport, MonthlyReportUseCase,
};

// ── GET /api/v1/dashboard/summary ────────────────────────────────────────────

#[derive(Deserialize, Default)]
pub struct SummaryQuery {
    pub days: Option<i64>,
}

pub async fn dashboard_summary(
    identity: Identity,
    State(state): State<AppState>,
    Query(query): Query<SummaryQuery>,
) -> Result<Json<DashboardSummary>, ApiServiceError> {
    require_manager(&identity)?;

    let usecase = DashboardSummaryUseCase {
        assessments: state.assessment_repo(),
    };
    let summary = usecase.execute(query.days).await?;
    Ok(Json(summary))
}

// ── GET /api/v1/ai/monthly-report ────────────────────────────────────────────

#[derive(Deserialize)]
pub struct MonthlyReportQuery {
    pub year: i32,
    pub month: u32,
}

pub async fn monthly_report(
    identity: Identity,
    State(state): State<AppState>,
    Query(query): Query<MonthlyReportQuery>,
) -> Result<Json<MonthlyReport>, ApiServiceError> {
    require_manager(&identity)?;

    let usecase = MonthlyReportUseCase {
        assessments: state.assessment_repo(),
    };
    let report = usecase.execute(query.year, query.month).await?;
    Ok(Json(report))
}
