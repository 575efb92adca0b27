use thiserror::Error;

#[derive(Debug, Error)]
pub enum OracleError {
    #[error("failed to build HTTP client: {0}")]
    Client(String),

    #[error("oracle request timed out")]
    Timeout,

    #[error("oracle unreachable: {0}")]
    Unreachable(String),

    #[error("oracle returned HTTP {status}")]
    Status { status: u16 },

    #[error("malformed oracle response: {0}")]
    Malformed(String),

    #[error("oracle returned unknown severity: {0}")]
    UnknownSeverity(String),
}
