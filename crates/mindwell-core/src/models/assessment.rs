use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::phq9::Phq9Responses;
use super::severity::Severity;

pub const PHQ9_ASSESSMENT_TYPE: &str = "PHQ-9";

/// Output of the rule-based classifier for one questionnaire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AssessmentResult {
    pub score: u8,
    pub severity: Severity,
    pub recommendations: Vec<String>,
    pub trigger_crisis_alert: bool,
}

/// Where the stored severity came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SeveritySource {
    Rules,
    Oracle,
}

/// A persisted assessment submission.
///
/// Created once per submission. The only mutation is the oracle's severity
/// overwrite, which never touches `score` or `trigger_crisis_alert`.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AssessmentRecord {
    pub id: Uuid,
    pub subject_id: String,
    pub assessment_type: String,
    pub responses: Phq9Responses,
    pub total_score: u8,
    pub severity: Severity,
    pub severity_source: SeveritySource,
    pub recommendations: Vec<String>,
    pub trigger_crisis_alert: bool,
    pub is_anonymous: bool,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}

impl AssessmentRecord {
    pub fn new_phq9(subject_id: &str, responses: Phq9Responses, result: AssessmentResult) -> Self {
        let now = jiff::Timestamp::now();
        Self {
            id: Uuid::new_v4(),
            subject_id: subject_id.to_string(),
            assessment_type: PHQ9_ASSESSMENT_TYPE.to_string(),
            responses,
            total_score: result.score,
            severity: result.severity,
            severity_source: SeveritySource::Rules,
            recommendations: result.recommendations,
            trigger_crisis_alert: result.trigger_crisis_alert,
            is_anonymous: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the stored severity with an externally supplied band.
    pub fn override_severity(&mut self, severity: Severity) {
        self.severity = severity;
        self.severity_source = SeveritySource::Oracle;
        self.updated_at = jiff::Timestamp::now();
    }
}
