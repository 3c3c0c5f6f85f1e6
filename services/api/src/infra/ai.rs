//! Provider-backed recommendation engine.
//!
//! The only network dependency outside the store. Every provider-side
//! failure — missing key, transport error, non-2xx, unreadable or empty
//! response — degrades into a single diagnostic recommendation; nothing
//! from this module surfaces as a 500.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::repository::{AssessmentRepository, RecommendationEngine};
use crate::domain::types::{Recommendation, SelfAssessment, category};
use crate::error::ApiServiceError;
use crate::state::AiSettings;
use crate::usecase::recommend::{
    MAX_FORWARDED_ASSESSMENTS, RECOMMENDATION_WINDOW_DAYS, onboarding_recommendation,
};

pub struct ProviderEngine<R> {
    pub assessments: R,
    pub http: reqwest::Client,
    pub settings: AiSettings,
}

// ── Wire types (generateContent REST shape) ──────────────────────────────────

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

// ── Prompt and response handling ─────────────────────────────────────────────

fn build_prompt(window: &[SelfAssessment]) -> String {
    let mut prompt = String::from(
        "You are a workplace wellbeing assistant. Based on the employee's recent \
         self-assessments (each metric on a 1-5 scale, 5 = very high), suggest a \
         short list of practical recommendations.\n\nAssessments, newest first:\n",
    );
    for a in window {
        prompt.push_str(&format!(
            "- {}: mood {}/5, stress {}/5, workload {}/5",
            a.created_at.format("%Y-%m-%d"),
            a.mood.rank(),
            a.stress.rank(),
            a.workload.rank(),
        ));
        if let Some(ref notes) = a.notes {
            prompt.push_str(&format!(" (notes: {notes})"));
        }
        prompt.push('\n');
    }
    prompt.push_str(
        "\nRespond with ONLY a JSON array, no prose and no markdown, where each \
         element is an object with string fields \"title\", \"description\" and \
         \"category\".",
    );
    prompt
}

/// Remove a markdown code fence (with optional info string) wrapping the
/// provider text, if present.
fn strip_code_fences(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.split_once('\n').map_or("", |(_, body)| body);
    let rest = rest.trim_end();
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

/// Decode the provider text into recommendations; an undecodable or empty
/// payload is wrapped verbatim as one general-advice item.
fn parse_recommendations(text: &str) -> Vec<Recommendation> {
    match serde_json::from_str::<Vec<Recommendation>>(strip_code_fences(text)) {
        Ok(recommendations) if !recommendations.is_empty() => recommendations,
        _ => vec![Recommendation {
            title: "General advice".to_owned(),
            description: text.trim().to_owned(),
            category: category::GENERAL_ADVICE.to_owned(),
        }],
    }
}

fn diagnostic(detail: String) -> Vec<Recommendation> {
    vec![Recommendation {
        title: "Recommendations are temporarily unavailable".to_owned(),
        description: detail,
        category: category::DIAGNOSTIC.to_owned(),
    }]
}

impl<R: AssessmentRepository> RecommendationEngine for ProviderEngine<R> {
    async fn recommendations_for(
        &self,
        user_id: Uuid,
        as_of: DateTime<Utc>,
    ) -> Result<Vec<Recommendation>, ApiServiceError> {
        let cutoff = as_of - Duration::days(RECOMMENDATION_WINDOW_DAYS);
        let window = self
            .assessments
            .list_recent_for_user(user_id, cutoff, Some(MAX_FORWARDED_ASSESSMENTS))
            .await?;

        // Nothing to personalize on; never call out for an empty window.
        if window.is_empty() {
            return Ok(vec![onboarding_recommendation()]);
        }

        let Some(api_key) = self.settings.api_key.as_deref().filter(|k| !k.is_empty()) else {
            return Ok(diagnostic(
                "config-missing: no provider API key is configured".to_owned(),
            ));
        };

        let prompt = build_prompt(&window);
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.settings.base_url.trim_end_matches('/'),
            self.settings.model,
        );
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: &prompt }],
            }],
        };

        let response = match self
            .http
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&request)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(error = %e, "provider request failed");
                return Ok(diagnostic(format!(
                    "transport: provider request failed ({e})"
                )));
            }
        };

        if !response.status().is_success() {
            let status = response.status();
            tracing::warn!(%status, "provider returned non-success status");
            return Ok(diagnostic(format!("status: provider returned {status}")));
        }

        let body: GenerateResponse = match response.json().await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!(error = %e, "provider response could not be read");
                return Ok(diagnostic(format!(
                    "empty-text: provider response could not be read ({e})"
                )));
            }
        };

        let text: String = body
            .candidates
            .into_iter()
            .next()
            .map(|c| c.content.parts.into_iter().map(|p| p.text).collect())
            .unwrap_or_default();
        if text.trim().is_empty() {
            return Ok(diagnostic("empty-text: provider returned no text".to_owned()));
        }

        Ok(parse_recommendations(&text))
    }
}
