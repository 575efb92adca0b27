use std::time::{Duration, Instant};

use async_trait::async_trait;
use mindwell_core::models::phq9::Phq9Responses;
use mindwell_core::models::severity::Severity;
use serde::Deserialize;
use tracing::debug;

use crate::error::OracleError;
use crate::SeverityOracle;

/// Expected response shape. Extra fields (confidence, raw score) are ignored.
#[derive(Debug, Deserialize)]
struct Prediction {
    severity: Option<String>,
}

/// `POST <url>` with the nine responses as a flat JSON object, bounded by a
/// client-wide timeout.
pub struct HttpSeverityOracle {
    url: String,
    client: reqwest::Client,
}

impl HttpSeverityOracle {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, OracleError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .build()
            .map_err(|e| OracleError::Client(e.to_string()))?;

        Ok(Self {
            url: url.into(),
            client,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl SeverityOracle for HttpSeverityOracle {
    fn name(&self) -> &str {
        "http"
    }

    async fn predict(&self, responses: &Phq9Responses) -> Result<Severity, OracleError> {
        let start = Instant::now();

        let response = self
            .client
            .post(&self.url)
            .json(responses)
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(OracleError::Status {
                status: status.as_u16(),
            });
        }

        let prediction: Prediction = response
            .json()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    OracleError::Timeout
                } else {
                    OracleError::Malformed(e.to_string())
                }
            })?;

        let label = prediction
            .severity
            .ok_or_else(|| OracleError::Malformed("missing severity field".to_string()))?;

        let severity = label
            .to_lowercase()
            .parse::<Severity>()
            .map_err(|_| OracleError::UnknownSeverity(label.clone()))?;

        debug!(
            severity = %severity,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "oracle prediction received"
        );
        Ok(severity)
    }
}

fn classify_transport_error(e: reqwest::Error) -> OracleError {
    if e.is_timeout() {
        OracleError::Timeout
    } else {
        OracleError::Unreachable(e.to_string())
    }
}
