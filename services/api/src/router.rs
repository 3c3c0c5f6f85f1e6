use axum::{
    Router,
    routing::{delete, get, post, put},
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use wellbeat_core::health::{health, ready};
use wellbeat_core::middleware::{propagate_request_id_layer, request_id_layer};

use crate::handlers::{
    assessment::{
        create_assessment, delete_assessment, get_assessment, get_my_assessments,
        update_assessment,
    },
    auth::{login, register},
    dashboard::{dashboard_summary, monthly_report},
    event::{create_event, list_events},
    recommend::my_recommendations,
    user::{get_me, list_users, set_user_status},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        // Auth
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        // Users
        .route("/users/me", get(get_me))
        .route("/users", get(list_users))
        .route("/users/{id}/status", put(set_user_status))
        // Self-assessments
        .route("/selfassessments", post(create_assessment))
        .route("/selfassessments/my", get(get_my_assessments))
        .route("/selfassessments/{id}", get(get_assessment))
        .route("/selfassessments/{id}", put(update_assessment))
        .route("/selfassessments/{id}", delete(delete_assessment))
        // Wellness events
        .route("/wellnessevents", post(create_event))
        .route("/wellnessevents", get(list_events))
        // Dashboard & AI
        .route("/dashboard/summary", get(dashboard_summary))
        .route("/ai/recommendations/me", get(my_recommendations))
        .route("/ai/monthly-report", get(monthly_report));

    Router::new()
        // Health stays unversioned for probe configs.
        .route("/health", get(health))
        .route("/health/ready", get(ready))
        .nest("/api/v1", api)
        // Set runs outermost so the generated id is visible to tracing and
        // gets propagated onto the response.
        .layer(
            ServiceBuilder::new()
                .layer(request_id_layer())
                .layer(TraceLayer::new_for_http())
                .layer(propagate_request_id_layer()),
        )
        .with_state(state)
}
