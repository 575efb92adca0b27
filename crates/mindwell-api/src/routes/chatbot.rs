use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};

use mindwell_core::models::assessment::AssessmentResult;
use mindwell_instruments::instruments::phq9;

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::routes::instruments::Phq9Request;
use crate::state::AppState;
use crate::triage;

#[derive(Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Serialize)]
pub struct ChatResponse {
    pub message: String,
    pub timestamp: jiff::Timestamp,
}

/// Reply to one chat message with a canned supportive response.
pub async fn chat(
    Extension(_user): Extension<AuthUser>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let Json(req) = payload?;
    let message = req.message.trim();
    if message.is_empty() {
        return Err(ApiError::BadRequest("Message cannot be empty".to_string()));
    }

    let reply = mindwell_chat::respond(message);

    Ok(Json(ChatResponse {
        message: reply.text,
        timestamp: reply.timestamp,
    }))
}

/// Score, persist, and cross-check a PHQ-9 submission.
///
/// The response always carries the rule-based result, even when the oracle
/// later overwrote the stored severity.
pub async fn submit_phq9(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    payload: Result<Json<Phq9Request>, JsonRejection>,
) -> Result<Json<AssessmentResult>, ApiError> {
    let Json(req) = payload?;
    let responses = phq9::parse_responses(&req.responses)?;

    let submission = triage::submit_phq9(&state, &user.sub, responses).await?;
    Ok(Json(submission.result))
}
