use axum::extract::State;
use axum::Json;
use chrono::Utc;

use wellbeat_auth_types::identity::Identity;

use crate::domain::types::Recommendation;
use crate::error::ApiServiceError;
use crate::state::AppState;
use crate::usecase::recommend::GetRecommendationsUseCase;

// ── GET /api/v1/ai/recommendations/me ────────────────────────────────────────

pub async fn my_recommendations(
    identity: Identity,
    State(state): State<AppState>,
) -> Result<Json<Vec<Recommendation>>, ApiServiceError> {
    let usecase = GetRecommendationsUseCase {
        engine: state.recommendation_engine(),
    };
    let recommendations = usecase.execute(identity.user_id, Utc::now()).await?;
    Ok(Json(recommendations))
}
