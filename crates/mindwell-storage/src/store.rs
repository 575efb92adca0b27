use async_trait::async_trait;
use aws_sdk_s3::Client;
use mindwell_core::models::assessment::AssessmentRecord;
use mindwell_core::models::severity::Severity;
use mindwell_core::s3_keys;
use tracing::{debug, info};
use uuid::Uuid;

use crate::documents::{load_document, save_document};
use crate::error::StorageError;
use crate::objects::{self, Precondition};

/// Persistence collaborator for assessment records.
///
/// Records are addressed by subject and id. `create` either stores the whole
/// record or fails; there is no partially written state.
#[async_trait]
pub trait AssessmentStore: Send + Sync {
    async fn create(&self, record: &AssessmentRecord) -> Result<(), StorageError>;

    /// Overwrite the stored severity of an existing record, returning the
    /// updated record.
    async fn update_severity(
        &self,
        subject_id: &str,
        id: Uuid,
        severity: Severity,
    ) -> Result<AssessmentRecord, StorageError>;

    async fn get(&self, subject_id: &str, id: Uuid) -> Result<AssessmentRecord, StorageError>;

    /// All records of one subject, newest first.
    async fn list_for_subject(
        &self,
        subject_id: &str,
    ) -> Result<Vec<AssessmentRecord>, StorageError>;
}

/// One JSON object per record at `assessments/{subject_id}/{id}.json`.
#[derive(Clone)]
pub struct S3AssessmentStore {
    client: Client,
    bucket: String,
}

impl S3AssessmentStore {
    pub fn new(client: Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }

    fn key(&self, subject_id: &str, id: Uuid) -> Result<String, StorageError> {
        s3_keys::validate_subject_id(subject_id)?;
        Ok(s3_keys::assessment(subject_id, id))
    }
}

#[async_trait]
impl AssessmentStore for S3AssessmentStore {
    async fn create(&self, record: &AssessmentRecord) -> Result<(), StorageError> {
        let key = self.key(&record.subject_id, record.id)?;
        save_document(&self.client, &self.bucket, &key, record, Precondition::Absent).await?;
        info!(key = %key, "assessment record stored");
        Ok(())
    }

    async fn update_severity(
        &self,
        subject_id: &str,
        id: Uuid,
        severity: Severity,
    ) -> Result<AssessmentRecord, StorageError> {
        let key = self.key(subject_id, id)?;
        let (mut record, etag): (AssessmentRecord, String) =
            load_document(&self.client, &self.bucket, &key).await?;

        record.override_severity(severity);

        let precondition = if etag.is_empty() {
            Precondition::None
        } else {
            Precondition::Matches(&etag)
        };
        save_document(&self.client, &self.bucket, &key, &record, precondition).await?;

        debug!(key = %key, severity = %severity, "assessment severity updated");
        Ok(record)
    }

    async fn get(&self, subject_id: &str, id: Uuid) -> Result<AssessmentRecord, StorageError> {
        let key = self.key(subject_id, id)?;
        let (record, _etag) = load_document(&self.client, &self.bucket, &key).await?;
        Ok(record)
    }

    async fn list_for_subject(
        &self,
        subject_id: &str,
    ) -> Result<Vec<AssessmentRecord>, StorageError> {
        s3_keys::validate_subject_id(subject_id)?;
        let prefix = s3_keys::subject_assessments_prefix(subject_id);
        let keys = objects::list_objects(&self.client, &self.bucket, &prefix).await?;

        let mut records = Vec::with_capacity(keys.len());
        for key in &keys {
            let (record, _etag): (AssessmentRecord, String) =
                load_document(&self.client, &self.bucket, key).await?;
            records.push(record);
        }

        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(records)
    }
}
