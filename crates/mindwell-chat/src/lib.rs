//! mindwell-chat
//!
//! Keyword-based supportive replies for the companion chat. Stateless and
//! single-turn: conversation history is never consulted.

pub mod intent;
pub mod replies;

use mindwell_core::models::conversation::ConversationTurn;
use tracing::debug;

/// Classify a user message and produce the assistant's reply turn.
pub fn respond(message: &str) -> ConversationTurn {
    let intent = intent::classify(message);
    debug!(intent = ?intent, "classified chat message");
    ConversationTurn::assistant(replies::reply_for(intent), intent)
}
