use std::collections::BTreeMap;

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use serde::Serialize;

use wellbeat_domain::level::{HIGH_RANK, LOW_RANK, Level};

use crate::domain::repository::AssessmentRepository;
use crate::domain::types::SelfAssessment;
use crate::error::ApiServiceError;

/// Default lookback window for the dashboard summary, in days.
pub const DEFAULT_SUMMARY_DAYS: i64 = 30;

/// Maximum accepted lookback window, in days.
pub const MAX_SUMMARY_DAYS: i64 = 365;

// ── Aggregation primitives ───────────────────────────────────────────────────

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Mean of one metric's integer ranks, rounded to 2 decimals; 0.0 for an
/// empty window. Shared with the rule-based recommendation engine.
pub(crate) fn mean(assessments: &[SelfAssessment], pick: impl Fn(&SelfAssessment) -> Level) -> f64 {
    if assessments.is_empty() {
        return 0.0;
    }
    let sum: i64 = assessments.iter().map(|a| pick(a).rank() as i64).sum();
    round2(sum as f64 / assessments.len() as f64)
}

/// Count of assessments per rank actually present. Ranks with zero
/// occurrences are omitted, not zero-filled.
fn distribution(
    assessments: &[SelfAssessment],
    pick: impl Fn(&SelfAssessment) -> Level,
) -> BTreeMap<i16, i64> {
    let mut counts = BTreeMap::new();
    for a in assessments {
        *counts.entry(pick(a).rank()).or_insert(0) += 1;
    }
    counts
}

/// Clamp a requested lookback to `(0, 365]`; anything else falls back to
/// the 30-day default.
fn clamp_days(days: Option<i64>) -> i64 {
    match days {
        Some(d) if d > 0 && d <= MAX_SUMMARY_DAYS => d,
        _ => DEFAULT_SUMMARY_DAYS,
    }
}

// ── Dashboard summary ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub period_days: i64,
    pub total_assessments: i64,
    pub average_mood: f64,
    pub average_stress: f64,
    pub average_workload: f64,
    pub mood_distribution: BTreeMap<i16, i64>,
    pub stress_distribution: BTreeMap<i16, i64>,
    pub workload_distribution: BTreeMap<i16, i64>,
}

pub struct DashboardSummaryUseCase<R: AssessmentRepository> {
    pub assessments: R,
}

impl<R: AssessmentRepository> DashboardSummaryUseCase<R> {
    pub async fn execute(&self, days: Option<i64>) -> Result<DashboardSummary, ApiServiceError> {
        let period_days = clamp_days(days);
        let cutoff = Utc::now() - Duration::days(period_days);
        let window = self.assessments.list_created_since(cutoff).await?;

        Ok(DashboardSummary {
            period_days,
            total_assessments: window.len() as i64,
            average_mood: mean(&window, |a| a.mood),
            average_stress: mean(&window, |a| a.stress),
            average_workload: mean(&window, |a| a.workload),
            mood_distribution: distribution(&window, |a| a.mood),
            stress_distribution: distribution(&window, |a| a.stress),
            workload_distribution: distribution(&window, |a| a.workload),
        })
    }
}

// ── Monthly report ───────────────────────────────────────────────────────────

const NO_DATA_NARRATIVE: &str = "No assessments were recorded in this period.";

const NO_DATA_ACTIONS: [&str; 2] = [
    "Encourage the team to log regular self-assessments.",
    "Revisit this report once data starts coming in.",
];

const STRESS_ACTIONS: [&str; 2] = [
    "Schedule one-on-ones to identify stress drivers.",
    "Promote short recovery breaks during the work day.",
];

const WORKLOAD_ACTIONS: [&str; 2] = [
    "Review task distribution across the team.",
    "Reprioritize or defer non-critical deliverables.",
];

const MOOD_ACTIONS: [&str; 2] = [
    "Organize a team activity to lift morale.",
    "Offer access to confidential emotional-support resources.",
];

const MAINTENANCE_ACTIONS: [&str; 2] = [
    "Keep the current wellbeing practices in place.",
    "Continue monitoring assessments for early warning signs.",
];

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyReport {
    pub year: i32,
    pub month: u32,
    pub total_assessments: i64,
    pub average_mood: f64,
    pub average_stress: f64,
    pub average_workload: f64,
    pub findings: Vec<String>,
    pub suggested_actions: Vec<String>,
}

/// Half-open UTC range `[first of month, first of next month)`.
fn month_range(year: i32, month: u32) -> Result<(DateTime<Utc>, DateTime<Utc>), ApiServiceError> {
    if !(1..=12).contains(&month) {
        return Err(ApiServiceError::InvalidMonth);
    }
    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or(ApiServiceError::InvalidMonth)?;
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let next =
        NaiveDate::from_ymd_opt(next_year, next_month, 1).ok_or(ApiServiceError::InvalidMonth)?;
    Ok((
        first.and_time(NaiveTime::MIN).and_utc(),
        next.and_time(NaiveTime::MIN).and_utc(),
    ))
}

/// Test the three threshold conditions independently, appending the fixed
/// action pair for each one that holds; the maintenance pair only when
/// none do.
fn suggested_actions(mood: f64, stress: f64, workload: f64) -> Vec<String> {
    let mut actions = Vec::new();
    if stress >= HIGH_RANK {
        actions.extend(STRESS_ACTIONS.iter().map(|s| s.to_string()));
    }
    if workload >= HIGH_RANK {
        actions.extend(WORKLOAD_ACTIONS.iter().map(|s| s.to_string()));
    }
    if mood <= LOW_RANK {
        actions.extend(MOOD_ACTIONS.iter().map(|s| s.to_string()));
    }
    if actions.is_empty() {
        actions.extend(MAINTENANCE_ACTIONS.iter().map(|s| s.to_string()));
    }
    actions
}

pub struct MonthlyReportUseCase<R: AssessmentRepository> {
    pub assessments: R,
}

impl<R: AssessmentRepository> MonthlyReportUseCase<R> {
    pub async fn execute(&self, year: i32, month: u32) -> Result<MonthlyReport, ApiServiceError> {
        let (from, to) = month_range(year, month)?;
        let window = self.assessments.list_created_between(from, to).await?;

        if window.is_empty() {
            return Ok(MonthlyReport {
                year,
                month,
                total_assessments: 0,
                average_mood: 0.0,
                average_stress: 0.0,
                average_workload: 0.0,
                findings: vec![NO_DATA_NARRATIVE.to_owned()],
                suggested_actions: NO_DATA_ACTIONS.iter().map(|s| s.to_string()).collect(),
            });
        }

        let average_mood = mean(&window, |a| a.mood);
        let average_stress = mean(&window, |a| a.stress);
        let average_workload = mean(&window, |a| a.workload);

        let findings = vec![
            format!("Average mood was {average_mood:.2} on the five-point scale."),
            format!("Average stress was {average_stress:.2} on the five-point scale."),
            format!("Average workload was {average_workload:.2} on the five-point scale."),
        ];

        Ok(MonthlyReport {
            year,
            month,
            total_assessments: window.len() as i64,
            average_mood,
            average_stress,
            average_workload,
            findings,
            suggested_actions: suggested_actions(average_mood, average_stress, average_workload),
        })
    }
}
