//! mindwell-oracle
//!
//! Client for the external severity prediction service. The service is an
//! untrusted, best-effort second opinion: every failure mode surfaces as an
//! `OracleError` for the caller to swallow.

pub mod client;
pub mod error;

use async_trait::async_trait;
use mindwell_core::models::phq9::Phq9Responses;
use mindwell_core::models::severity::Severity;

use error::OracleError;

pub use client::HttpSeverityOracle;

/// An external source of severity estimates.
#[async_trait]
pub trait SeverityOracle: Send + Sync {
    /// Short name used in logs and audit events.
    fn name(&self) -> &str;

    /// One attempt, no retries.
    async fn predict(&self, responses: &Phq9Responses) -> Result<Severity, OracleError>;
}
