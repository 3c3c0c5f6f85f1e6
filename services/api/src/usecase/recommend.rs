use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use wellbeat_domain::level::{HIGH_RANK, LOW_RANK};

use crate::domain::repository::{AssessmentRepository, RecommendationEngine};
use crate::domain::types::{Recommendation, category};
use crate::error::ApiServiceError;
use crate::usecase::dashboard::mean;

/// Trailing window of assessment history considered, in days.
pub const RECOMMENDATION_WINDOW_DAYS: i64 = 30;

/// Upper bound on assessments forwarded to the external provider.
pub const MAX_FORWARDED_ASSESSMENTS: u64 = 5;

/// The single recommendation returned to users with no recorded history.
pub fn onboarding_recommendation() -> Recommendation {
    Recommendation {
        title: "Start your wellbeing journal".to_owned(),
        description: "Log your first self-assessment so recommendations can be \
                      tailored to how you actually feel week to week."
            .to_owned(),
        category: category::ONBOARDING.to_owned(),
    }
}

// ── GetRecommendations ───────────────────────────────────────────────────────

pub struct GetRecommendationsUseCase<E: RecommendationEngine> {
    pub engine: E,
}

impl<E: RecommendationEngine> GetRecommendationsUseCase<E> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        as_of: DateTime<Utc>,
    ) -> Result<Vec<Recommendation>, ApiServiceError> {
        self.engine.recommendations_for(user_id, as_of).await
    }
}

// ── Rule-based engine ────────────────────────────────────────────────────────

/// Deterministic local generator: the same three means as the dashboard,
/// one fixed recommendation per crossed threshold, a maintenance item when
/// none cross. No network dependency.
pub struct RuleBasedEngine<R: AssessmentRepository> {
    pub assessments: R,
}

impl<R: AssessmentRepository> RecommendationEngine for RuleBasedEngine<R> {
    async fn recommendations_for(
        &self,
        user_id: Uuid,
        as_of: DateTime<Utc>,
    ) -> Result<Vec<Recommendation>, ApiServiceError> {
        let cutoff = as_of - Duration::days(RECOMMENDATION_WINDOW_DAYS);
        let window = self
            .assessments
            .list_recent_for_user(user_id, cutoff, None)
            .await?;

        if window.is_empty() {
            return Ok(vec![onboarding_recommendation()]);
        }

        let mood = mean(&window, |a| a.mood);
        let stress = mean(&window, |a| a.stress);
        let workload = mean(&window, |a| a.workload);

        let mut recommendations = Vec::new();
        if stress >= HIGH_RANK {
            recommendations.push(Recommendation {
                title: "Bring your stress level down".to_owned(),
                description: "Your recent stress readings are elevated. Block short \
                              recovery breaks into your day and raise persistent \
                              stressors with your manager."
                    .to_owned(),
                category: category::STRESS_MANAGEMENT.to_owned(),
            });
        }
        if workload >= HIGH_RANK {
            recommendations.push(Recommendation {
                title: "Rebalance your workload".to_owned(),
                description: "Workload has been running high. Review your commitments \
                              and agree on what can be deferred or delegated."
                    .to_owned(),
                category: category::WORKLOAD.to_owned(),
            });
        }
        if mood <= LOW_RANK {
            recommendations.push(Recommendation {
                title: "Take care of your emotional health".to_owned(),
                description: "Mood has trended low lately. Make room for activities \
                              that recharge you, and consider talking to someone you \
                              trust."
                    .to_owned(),
                category: category::EMOTIONAL_HEALTH.to_owned(),
            });
        }
        if recommendations.is_empty() {
            recommendations.push(Recommendation {
                title: "Keep up the good habits".to_owned(),
                description: "Your recent assessments look balanced. Keep logging \
                              regularly so changes are caught early."
                    .to_owned(),
                category: category::MAINTENANCE.to_owned(),
            });
        }
        Ok(recommendations)
    }
}
