use serde::{Deserialize, Serialize};

/// Category selected by the keyword router for one user message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Crisis,
    AssessmentRequest,
    Anxiety,
    Depression,
    Stress,
    Sleep,
    Fallback,
}

/// Role of a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnRole {
    User,
    Assistant,
}

/// A single message in a conversation. Ephemeral; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub text: String,
    pub role: TurnRole,
    pub intent: Option<Intent>,
    pub timestamp: jiff::Timestamp,
}

impl ConversationTurn {
    pub fn assistant(text: impl Into<String>, intent: Intent) -> Self {
        Self {
            text: text.into(),
            role: TurnRole::Assistant,
            intent: Some(intent),
            timestamp: jiff::Timestamp::now(),
        }
    }
}
