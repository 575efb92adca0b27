use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("unknown severity label: {0}")]
    InvalidSeverity(String),

    #[error("invalid subject id: {0:?}")]
    InvalidSubject(String),

    #[error("invalid uuid: {0}")]
    InvalidUuid(#[from] uuid::Error),
}
