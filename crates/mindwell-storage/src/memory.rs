use std::collections::HashMap;

use async_trait::async_trait;
use mindwell_core::models::assessment::AssessmentRecord;
use mindwell_core::models::severity::Severity;
use mindwell_core::s3_keys;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::StorageError;
use crate::store::AssessmentStore;

/// In-process store. Nothing survives a restart.
#[derive(Default)]
pub struct MemoryAssessmentStore {
    records: RwLock<HashMap<Uuid, AssessmentRecord>>,
}

impl MemoryAssessmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

fn not_found(subject_id: &str, id: Uuid) -> StorageError {
    StorageError::NotFound {
        key: s3_keys::assessment(subject_id, id),
    }
}

#[async_trait]
impl AssessmentStore for MemoryAssessmentStore {
    async fn create(&self, record: &AssessmentRecord) -> Result<(), StorageError> {
        s3_keys::validate_subject_id(&record.subject_id)?;

        let mut records = self.records.write().await;
        if records.contains_key(&record.id) {
            return Err(StorageError::PreconditionFailed {
                key: s3_keys::assessment(&record.subject_id, record.id),
            });
        }
        records.insert(record.id, record.clone());
        Ok(())
    }

    async fn update_severity(
        &self,
        subject_id: &str,
        id: Uuid,
        severity: Severity,
    ) -> Result<AssessmentRecord, StorageError> {
        let mut records = self.records.write().await;
        let record = records
            .get_mut(&id)
            .filter(|r| r.subject_id == subject_id)
            .ok_or_else(|| not_found(subject_id, id))?;

        record.override_severity(severity);
        Ok(record.clone())
    }

    async fn get(&self, subject_id: &str, id: Uuid) -> Result<AssessmentRecord, StorageError> {
        self.records
            .read()
            .await
            .get(&id)
            .filter(|r| r.subject_id == subject_id)
            .cloned()
            .ok_or_else(|| not_found(subject_id, id))
    }

    async fn list_for_subject(
        &self,
        subject_id: &str,
    ) -> Result<Vec<AssessmentRecord>, StorageError> {
        let mut records: Vec<AssessmentRecord> = self
            .records
            .read()
            .await
            .values()
            .filter(|r| r.subject_id == subject_id)
            .cloned()
            .collect();

        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(records)
    }
}
