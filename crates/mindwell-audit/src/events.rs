use serde::Serialize;
use tracing::{info, warn};

pub const ASSESSMENT_CREATED: &str = "assessment_created";
pub const CRISIS_ALERT: &str = "crisis_alert";
pub const SEVERITY_OVERRIDDEN: &str = "severity_overridden";
pub const ORACLE_UNAVAILABLE: &str = "oracle_unavailable";

/// Whether the audited action completed or was degraded and recovered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Success,
    SoftFailure,
}

/// A structured audit event.
///
/// Events carry identifiers and classifications only, never questionnaire
/// answers or chat text. Crisis alerts are picked up from the log stream by
/// the downstream follow-up process; nothing here dispatches notifications.
#[derive(Debug, Clone, Serialize)]
pub struct AuditEvent {
    pub action: String,
    pub resource_type: String,
    pub resource_id: String,
    pub subject_id: String,
    pub outcome: Outcome,
    pub details: Option<serde_json::Value>,
}

impl AuditEvent {
    pub fn new(
        action: impl Into<String>,
        resource_type: impl Into<String>,
        resource_id: impl Into<String>,
        subject_id: impl Into<String>,
    ) -> Self {
        Self {
            action: action.into(),
            resource_type: resource_type.into(),
            resource_id: resource_id.into(),
            subject_id: subject_id.into(),
            outcome: Outcome::Success,
            details: None,
        }
    }

    /// Shorthand for an event about an assessment record.
    pub fn assessment(
        action: impl Into<String>,
        assessment_id: impl ToString,
        subject_id: impl Into<String>,
    ) -> Self {
        Self::new(action, "assessment", assessment_id.to_string(), subject_id)
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn soft_failure(mut self) -> Self {
        self.outcome = Outcome::SoftFailure;
        self
    }

    /// Emit this audit event via tracing. Soft failures log at `warn`.
    pub fn emit(&self) {
        let details = self
            .details
            .as_ref()
            .map(|d| d.to_string())
            .unwrap_or_default();

        match self.outcome {
            Outcome::Success => info!(
                audit.action = %self.action,
                audit.resource_type = %self.resource_type,
                audit.resource_id = %self.resource_id,
                audit.subject_id = %self.subject_id,
                audit.details = %details,
                "audit event"
            ),
            Outcome::SoftFailure => warn!(
                audit.action = %self.action,
                audit.resource_type = %self.resource_type,
                audit.resource_id = %self.resource_id,
                audit.subject_id = %self.subject_id,
                audit.details = %details,
                "audit event (soft failure)"
            ),
        }
    }
}
