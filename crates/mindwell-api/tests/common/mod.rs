#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use jsonwebtoken::{encode, EncodingKey, Header};
use mindwell_api::state::{AppState, OracleAdapter};
use mindwell_api::{cors_layer, router};
use mindwell_auth::jwt::TokenVerifier;
use mindwell_core::models::assessment::AssessmentRecord;
use mindwell_core::models::phq9::Phq9Responses;
use mindwell_core::models::severity::Severity;
use mindwell_oracle::error::OracleError;
use mindwell_oracle::SeverityOracle;
use mindwell_storage::error::StorageError;
use mindwell_storage::{AssessmentStore, MemoryAssessmentStore};
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

pub const SECRET: &str = "integration-secret";

pub fn token_for(subject: &str) -> String {
    let claims = json!({
        "sub": subject,
        "exp": jiff::Timestamp::now().as_second() + 3600,
    });
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(SECRET.as_bytes()),
    )
    .unwrap()
}

pub fn state(store: Arc<dyn AssessmentStore>, oracle: Option<OracleAdapter>) -> AppState {
    AppState {
        store,
        oracle,
        verifier: Arc::new(TokenVerifier::new(SECRET.as_bytes())),
    }
}

pub fn app(state: AppState) -> Router {
    router(state, cors_layer(None).unwrap())
}

pub fn adapter(oracle: impl SeverityOracle + 'static, timeout_ms: u64) -> OracleAdapter {
    OracleAdapter {
        oracle: Arc::new(oracle),
        timeout: Duration::from_millis(timeout_ms),
    }
}

pub fn post_json(uri: &str, body: Value, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(t) = token {
        builder = builder.header("authorization", format!("Bearer {t}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(t) = token {
        builder = builder.header("authorization", format!("Bearer {t}"));
    }
    builder.body(Body::empty()).unwrap()
}

pub async fn send(app: Router, req: Request<Body>) -> (StatusCode, Value) {
    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };
    (status, value)
}

pub fn responses(values: [u8; 9]) -> Value {
    let r = Phq9Responses::from_values(values);
    json!({ "responses": r })
}

/// Oracle that always answers with the same band.
pub struct FixedOracle(pub Severity);

#[async_trait]
impl SeverityOracle for FixedOracle {
    fn name(&self) -> &str {
        "fixed"
    }

    async fn predict(&self, _responses: &Phq9Responses) -> Result<Severity, OracleError> {
        Ok(self.0)
    }
}

/// Oracle that is never reachable.
pub struct DownOracle;

#[async_trait]
impl SeverityOracle for DownOracle {
    fn name(&self) -> &str {
        "down"
    }

    async fn predict(&self, _responses: &Phq9Responses) -> Result<Severity, OracleError> {
        Err(OracleError::Unreachable("connection refused".to_string()))
    }
}

/// Oracle that hangs far longer than any configured timeout.
pub struct StalledOracle;

#[async_trait]
impl SeverityOracle for StalledOracle {
    fn name(&self) -> &str {
        "stalled"
    }

    async fn predict(&self, _responses: &Phq9Responses) -> Result<Severity, OracleError> {
        tokio::time::sleep(Duration::from_secs(30)).await;
        Ok(Severity::Minimal)
    }
}

/// Store whose backend is unreachable for every operation.
pub struct UnreachableStore;

#[async_trait]
impl AssessmentStore for UnreachableStore {
    async fn create(&self, _record: &AssessmentRecord) -> Result<(), StorageError> {
        Err(StorageError::PutObject("dispatch failure".to_string()))
    }

    async fn update_severity(
        &self,
        _subject_id: &str,
        _id: Uuid,
        _severity: Severity,
    ) -> Result<AssessmentRecord, StorageError> {
        Err(StorageError::PutObject("dispatch failure".to_string()))
    }

    async fn get(&self, _subject_id: &str, _id: Uuid) -> Result<AssessmentRecord, StorageError> {
        Err(StorageError::GetObject("dispatch failure".to_string()))
    }

    async fn list_for_subject(
        &self,
        _subject_id: &str,
    ) -> Result<Vec<AssessmentRecord>, StorageError> {
        Err(StorageError::ListObjects("dispatch failure".to_string()))
    }
}

/// Store that accepts creates but refuses every severity overwrite.
#[derive(Default)]
pub struct ReadOnlyAfterCreate {
    pub inner: MemoryAssessmentStore,
}

#[async_trait]
impl AssessmentStore for ReadOnlyAfterCreate {
    async fn create(&self, record: &AssessmentRecord) -> Result<(), StorageError> {
        self.inner.create(record).await
    }

    async fn update_severity(
        &self,
        subject_id: &str,
        id: Uuid,
        _severity: Severity,
    ) -> Result<AssessmentRecord, StorageError> {
        Err(StorageError::PreconditionFailed {
            key: format!("assessments/{subject_id}/{id}.json"),
        })
    }

    async fn get(&self, subject_id: &str, id: Uuid) -> Result<AssessmentRecord, StorageError> {
        self.inner.get(subject_id, id).await
    }

    async fn list_for_subject(
        &self,
        subject_id: &str,
    ) -> Result<Vec<AssessmentRecord>, StorageError> {
        self.inner.list_for_subject(subject_id).await
    }
}

/// Store whose severity overwrite never completes.
#[derive(Default)]
pub struct StalledUpdateStore {
    pub inner: MemoryAssessmentStore,
}

#[async_trait]
impl AssessmentStore for StalledUpdateStore {
    async fn create(&self, record: &AssessmentRecord) -> Result<(), StorageError> {
        self.inner.create(record).await
    }

    async fn update_severity(
        &self,
        subject_id: &str,
        id: Uuid,
        severity: Severity,
    ) -> Result<AssessmentRecord, StorageError> {
        tokio::time::sleep(Duration::from_secs(30)).await;
        self.inner.update_severity(subject_id, id, severity).await
    }

    async fn get(&self, subject_id: &str, id: Uuid) -> Result<AssessmentRecord, StorageError> {
        self.inner.get(subject_id, id).await
    }

    async fn list_for_subject(
        &self,
        subject_id: &str,
    ) -> Result<Vec<AssessmentRecord>, StorageError> {
        self.inner.list_for_subject(subject_id).await
    }
}
