use axum::extract::{Path, State};
use axum::{Extension, Json};
use uuid::Uuid;

use mindwell_core::models::assessment::AssessmentRecord;

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// The caller's own assessment history, newest first.
pub async fn list_assessments(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Vec<AssessmentRecord>>, ApiError> {
    let records = state.store.list_for_subject(&user.sub).await?;
    Ok(Json(records))
}

pub async fn get_assessment(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<AssessmentRecord>, ApiError> {
    let record = state.store.get(&user.sub, id).await?;
    Ok(Json(record))
}
