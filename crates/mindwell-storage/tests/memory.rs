use mindwell_core::models::assessment::{AssessmentRecord, SeveritySource};
use mindwell_core::models::phq9::Phq9Responses;
use mindwell_core::models::severity::Severity;
use mindwell_core::models::assessment::AssessmentResult;
use mindwell_storage::error::StorageError;
use mindwell_storage::{AssessmentStore, MemoryAssessmentStore};

fn record(subject: &str, score: u8) -> AssessmentRecord {
    AssessmentRecord::new_phq9(
        subject,
        Phq9Responses::from_values([0; 9]),
        AssessmentResult {
            score,
            severity: Severity::Minimal,
            recommendations: vec!["Continue with healthy lifestyle habits and self-care practices.".to_string()],
            trigger_crisis_alert: false,
        },
    )
}

#[tokio::test]
async fn create_then_get_round_trips() {
    let store = MemoryAssessmentStore::new();
    let rec = record("student1", 0);

    store.create(&rec).await.unwrap();
    let loaded = store.get("student1", rec.id).await.unwrap();

    assert_eq!(loaded.id, rec.id);
    assert_eq!(loaded.assessment_type, "PHQ-9");
    assert_eq!(loaded.severity_source, SeveritySource::Rules);
    assert!(loaded.is_anonymous);
}

#[tokio::test]
async fn duplicate_create_is_rejected() {
    let store = MemoryAssessmentStore::new();
    let rec = record("student1", 0);

    store.create(&rec).await.unwrap();
    let err = store.create(&rec).await.unwrap_err();
    assert!(matches!(err, StorageError::PreconditionFailed { .. }));
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn update_severity_only_touches_severity() {
    let store = MemoryAssessmentStore::new();
    let rec = record("student1", 3);
    store.create(&rec).await.unwrap();

    let updated = store
        .update_severity("student1", rec.id, Severity::Mild)
        .await
        .unwrap();

    assert_eq!(updated.severity, Severity::Mild);
    assert_eq!(updated.severity_source, SeveritySource::Oracle);
    assert_eq!(updated.total_score, 3);
    assert_eq!(updated.trigger_crisis_alert, rec.trigger_crisis_alert);
    assert_eq!(updated.recommendations, rec.recommendations);
    assert!(updated.updated_at >= rec.updated_at);
}

#[tokio::test]
async fn records_are_scoped_to_their_subject() {
    let store = MemoryAssessmentStore::new();
    let rec = record("student1", 0);
    store.create(&rec).await.unwrap();

    assert!(matches!(
        store.get("student2", rec.id).await,
        Err(StorageError::NotFound { .. })
    ));
    assert!(matches!(
        store.update_severity("student2", rec.id, Severity::Severe).await,
        Err(StorageError::NotFound { .. })
    ));
    assert!(store.list_for_subject("student2").await.unwrap().is_empty());
}

#[tokio::test]
async fn list_is_newest_first() {
    let store = MemoryAssessmentStore::new();
    let older = record("student1", 1);
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    let newer = record("student1", 2);

    store.create(&older).await.unwrap();
    store.create(&newer).await.unwrap();

    let listed = store.list_for_subject("student1").await.unwrap();
    let ids: Vec<_> = listed.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![newer.id, older.id]);
}

#[tokio::test]
async fn unsafe_subject_ids_are_rejected() {
    let store = MemoryAssessmentStore::new();
    let err = store.create(&record("../escape", 0)).await.unwrap_err();
    assert!(matches!(err, StorageError::InvalidKey(_)));
}
