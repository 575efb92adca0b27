use axum::extract::Path;
use axum::extract::rejection::JsonRejection;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use mindwell_core::models::assessment::AssessmentResult;
use mindwell_instruments::error::InstrumentError;
use mindwell_instruments::instruments::phq9;
use mindwell_instruments::scoring::{Item, ResponseOption, SeverityBand};
use mindwell_instruments::{all_instruments, get_instrument};

use crate::error::ApiError;

#[derive(Serialize)]
pub struct InstrumentSummary {
    id: String,
    name: String,
}

#[derive(Serialize)]
pub struct InstrumentDetail {
    id: String,
    name: String,
    items: Vec<Item>,
    response_options: Vec<ResponseOption>,
    severity_bands: Vec<SeverityBand>,
    max_score: u8,
}

/// Request body shared by the scoring and submission endpoints.
#[derive(Deserialize)]
pub struct Phq9Request {
    pub responses: Map<String, Value>,
}

pub async fn list_instruments() -> Json<Vec<InstrumentSummary>> {
    let instruments: Vec<InstrumentSummary> = all_instruments()
        .iter()
        .map(|i| InstrumentSummary {
            id: i.id().to_string(),
            name: i.name().to_string(),
        })
        .collect();
    Json(instruments)
}

pub async fn get_instrument_detail(
    Path(id): Path<String>,
) -> Result<Json<InstrumentDetail>, ApiError> {
    let instrument = get_instrument(&id).ok_or(InstrumentError::UnknownInstrument(id))?;

    Ok(Json(InstrumentDetail {
        id: instrument.id().to_string(),
        name: instrument.name().to_string(),
        items: instrument.items().to_vec(),
        response_options: instrument.response_options().to_vec(),
        severity_bands: instrument.severity_bands().to_vec(),
        max_score: instrument.max_score(),
    }))
}

/// Score a questionnaire without storing it. Used by the front-end to show
/// results with the same classifier the server persists with.
pub async fn score_phq9(
    payload: Result<Json<Phq9Request>, JsonRejection>,
) -> Result<Json<AssessmentResult>, ApiError> {
    let Json(req) = payload?;
    let responses = phq9::parse_responses(&req.responses)?;
    Ok(Json(phq9::classify(&responses)))
}
