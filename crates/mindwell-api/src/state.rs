use std::sync::Arc;
use std::time::Duration;

use mindwell_auth::jwt::TokenVerifier;
use mindwell_oracle::error::OracleError;
use mindwell_oracle::{HttpSeverityOracle, SeverityOracle};
use mindwell_storage::{AssessmentStore, MemoryAssessmentStore, S3AssessmentStore};
use tracing::{info, warn};

use crate::config::{Config, StoreConfig};

/// A configured oracle plus the hard cap on how long a submission waits for it.
#[derive(Clone)]
pub struct OracleAdapter {
    pub oracle: Arc<dyn SeverityOracle>,
    pub timeout: Duration,
}

/// Shared application state, injected into all route handlers via Axum state.
/// Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn AssessmentStore>,
    pub oracle: Option<OracleAdapter>,
    pub verifier: Arc<TokenVerifier>,
}

impl AppState {
    pub async fn from_config(config: &Config) -> Result<Self, OracleError> {
        let store: Arc<dyn AssessmentStore> = match &config.store {
            StoreConfig::S3 { bucket, endpoint } => {
                info!(bucket = %bucket, "using S3 assessment store");
                let client = mindwell_storage::client::build_client(endpoint.as_deref()).await;
                Arc::new(S3AssessmentStore::new(client, bucket.clone()))
            }
            StoreConfig::Memory => {
                warn!("using in-process assessment store; records are lost on restart");
                Arc::new(MemoryAssessmentStore::new())
            }
        };

        let oracle = match &config.oracle {
            Some(oracle_config) => {
                let client = HttpSeverityOracle::new(&oracle_config.url, oracle_config.timeout)?;
                info!(
                    url = %client.url(),
                    timeout_ms = oracle_config.timeout.as_millis() as u64,
                    "oracle cross-check enabled"
                );
                Some(OracleAdapter {
                    oracle: Arc::new(client),
                    timeout: oracle_config.timeout,
                })
            }
            None => None,
        };

        Ok(Self {
            store,
            oracle,
            verifier: Arc::new(TokenVerifier::new(config.jwt_secret.as_bytes())),
        })
    }
}
