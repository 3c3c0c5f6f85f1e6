use axum::extract::FromRef;
use sea_orm::DatabaseConnection;

use wellbeat_auth_types::token::AuthVerifier;

use crate::infra::ai::ProviderEngine;
use crate::infra::db::{DbAssessmentRepository, DbEventRepository, DbUserRepository};

/// Text-generation provider parameters, read-only after startup.
#[derive(Debug, Clone)]
pub struct AiSettings {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
}

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub verifier: AuthVerifier,
    pub ai: AiSettings,
    pub http: reqwest::Client,
}

impl AppState {
    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }

    pub fn assessment_repo(&self) -> DbAssessmentRepository {
        DbAssessmentRepository {
            db: self.db.clone(),
        }
    }

    pub fn event_repo(&self) -> DbEventRepository {
        DbEventRepository {
            db: self.db.clone(),
        }
    }

    pub fn recommendation_engine(&self) -> ProviderEngine<DbAssessmentRepository> {
        ProviderEngine {
            assessments: self.assessment_repo(),
            http: self.http.clone(),
            settings: self.ai.clone(),
        }
    }
}

// Lets the `Identity` extractor pull the verifier straight from state.
impl FromRef<AppState> for AuthVerifier {
    fn from_ref(state: &AppState) -> Self {
        state.verifier.clone()
    }
}
