use mindwell_core::models::severity::Severity;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// Inclusive integer range an item response must fall in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreRange {
    pub min: u8,
    pub max: u8,
}

impl ScoreRange {
    pub fn contains(&self, value: u64) -> bool {
        value >= u64::from(self.min) && value <= u64::from(self.max)
    }
}

/// A single questionnaire item.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Item {
    pub id: String,
    pub prompt: String,
    pub range: ScoreRange,
}

/// A labelled answer choice.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ResponseOption {
    pub value: u8,
    pub label: String,
}

/// Total-score interval mapped to a severity band.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SeverityBand {
    pub severity: Severity,
    pub min_score: u8,
    pub max_score: u8,
}

/// A single item-level validation failure.
#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    pub item_id: String,
    pub value: Option<serde_json::Value>,
    pub message: String,
}
