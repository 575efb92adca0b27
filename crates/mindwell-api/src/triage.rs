//! PHQ-9 submission pipeline: classify, record, then cross-check.
//!
//! Ordering within one submission is fixed. The record is created before the
//! oracle is consulted, because the oracle's answer overwrites that record.
//! Everything after a successful create is best-effort and never fails the
//! submission.

use mindwell_audit::events::{
    AuditEvent, ASSESSMENT_CREATED, CRISIS_ALERT, ORACLE_UNAVAILABLE, SEVERITY_OVERRIDDEN,
};
use mindwell_core::models::assessment::{AssessmentRecord, AssessmentResult};
use mindwell_core::models::phq9::Phq9Responses;
use mindwell_core::models::severity::Severity;
use mindwell_instruments::instruments::phq9;
use mindwell_oracle::error::OracleError;
use mindwell_storage::error::StorageError;
use mindwell_storage::AssessmentStore;
use serde_json::json;
use tracing::{debug, info, warn};

use crate::state::{AppState, OracleAdapter};

/// Outcome of a submission.
#[derive(Debug)]
pub struct Submission {
    /// Rule-based result, as returned to the caller.
    pub result: AssessmentResult,
    /// The stored record after any oracle overwrite.
    pub record: AssessmentRecord,
}

pub async fn submit_phq9(
    state: &AppState,
    subject_id: &str,
    responses: Phq9Responses,
) -> Result<Submission, StorageError> {
    let result = phq9::classify(&responses);
    let mut record =
        record_assessment(state.store.as_ref(), subject_id, responses, result.clone()).await?;

    if let Some(adapter) = &state.oracle
        && let Some(updated) = cross_check(state.store.as_ref(), adapter, &record).await
    {
        record = updated;
    }

    Ok(Submission { result, record })
}

/// Persist a classified submission. Not retried on failure.
pub async fn record_assessment(
    store: &dyn AssessmentStore,
    subject_id: &str,
    responses: Phq9Responses,
    result: AssessmentResult,
) -> Result<AssessmentRecord, StorageError> {
    let record = AssessmentRecord::new_phq9(subject_id, responses, result);
    store.create(&record).await?;

    AuditEvent::assessment(ASSESSMENT_CREATED, record.id, subject_id)
        .with_details(json!({
            "assessment_type": record.assessment_type,
            "score": record.total_score,
            "severity": record.severity,
        }))
        .emit();

    if record.trigger_crisis_alert {
        AuditEvent::assessment(CRISIS_ALERT, record.id, subject_id)
            .with_details(json!({ "score": record.total_score }))
            .emit();
    }

    Ok(record)
}

/// Ask the oracle once and overwrite the stored severity when it disagrees.
///
/// Returns the updated record, or `None` when the oracle agreed, failed, or
/// the overwrite failed, in which case the stored rule-based severity stands.
/// The prediction and the overwrite are each bounded by the adapter timeout.
pub async fn cross_check(
    store: &dyn AssessmentStore,
    adapter: &OracleAdapter,
    record: &AssessmentRecord,
) -> Option<AssessmentRecord> {
    let severity = match ask_oracle(adapter, &record.responses).await {
        Ok(severity) => severity,
        Err(e) => {
            warn!(
                oracle = adapter.oracle.name(),
                error = %e,
                "oracle unavailable, keeping rule-based severity"
            );
            soft_failure(record, json!({ "stage": "predict", "error": e.to_string() }));
            return None;
        }
    };

    if severity == record.severity {
        debug!(severity = %severity, "oracle agreed with rule-based severity");
        return None;
    }

    let update = tokio::time::timeout(
        adapter.timeout,
        store.update_severity(&record.subject_id, record.id, severity),
    )
    .await;

    match update {
        Ok(Ok(updated)) => {
            info!(
                rule_severity = %record.severity,
                oracle_severity = %severity,
                "oracle disagreed with rule-based severity"
            );
            AuditEvent::assessment(SEVERITY_OVERRIDDEN, record.id, &record.subject_id)
                .with_details(json!({
                    "rule_severity": record.severity,
                    "oracle_severity": severity,
                }))
                .emit();
            Some(updated)
        }
        Ok(Err(e)) => {
            warn!(error = %e, "failed to store oracle severity, keeping rule-based severity");
            soft_failure(record, json!({ "stage": "update", "error": e.to_string() }));
            None
        }
        Err(_elapsed) => {
            warn!("storing oracle severity timed out, keeping rule-based severity");
            soft_failure(record, json!({ "stage": "update", "error": "timed out" }));
            None
        }
    }
}

async fn ask_oracle(
    adapter: &OracleAdapter,
    responses: &Phq9Responses,
) -> Result<Severity, OracleError> {
    tokio::time::timeout(adapter.timeout, adapter.oracle.predict(responses))
        .await
        .unwrap_or(Err(OracleError::Timeout))
}

fn soft_failure(record: &AssessmentRecord, details: serde_json::Value) {
    AuditEvent::assessment(ORACLE_UNAVAILABLE, record.id, &record.subject_id)
        .with_details(details)
        .soft_failure()
        .emit();
}
