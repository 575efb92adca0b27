use std::sync::LazyLock;

use mindwell_core::models::assessment::AssessmentResult;
use mindwell_core::models::phq9::Phq9Responses;
use mindwell_core::models::severity::Severity;
use serde_json::{Map, Value};

use crate::error::InstrumentError;
use crate::recommendations::{crisis_alert, recommendations_for};
use crate::scoring::{Item, ResponseOption, ScoreRange, SeverityBand};
use crate::Instrument;

/// PHQ-9: Patient Health Questionnaire, nine items.
/// Each item rated 0–3 over the last two weeks. Total 0–27.
pub struct Phq9;

const ITEM_RANGE: ScoreRange = ScoreRange { min: 0, max: 3 };

/// Upper bound of each band; anything above the last entry is severe.
pub const SEVERITY_BANDS: [SeverityBand; 5] = [
    band(Severity::Minimal, 0, 4),
    band(Severity::Mild, 5, 9),
    band(Severity::Moderate, 10, 14),
    band(Severity::ModeratelySevere, 15, 19),
    band(Severity::Severe, 20, 27),
];

const fn band(severity: Severity, min_score: u8, max_score: u8) -> SeverityBand {
    SeverityBand {
        severity,
        min_score,
        max_score,
    }
}

impl Instrument for Phq9 {
    fn id(&self) -> &str {
        "phq9"
    }

    fn name(&self) -> &str {
        "PHQ-9"
    }

    fn items(&self) -> &[Item] {
        static ITEMS: LazyLock<Vec<Item>> = LazyLock::new(|| {
            let prompts = [
                "Little interest or pleasure in doing things",
                "Feeling down, depressed, or hopeless",
                "Trouble falling or staying asleep, or sleeping too much",
                "Feeling tired or having little energy",
                "Poor appetite or overeating",
                "Feeling bad about yourself or that you are a failure",
                "Trouble concentrating on things",
                "Moving or speaking slowly, or being restless",
                "Thoughts that you would be better off dead or hurting yourself",
            ];

            prompts
                .iter()
                .enumerate()
                .map(|(i, prompt)| Item {
                    id: format!("q{}", i + 1),
                    prompt: prompt.to_string(),
                    range: ITEM_RANGE,
                })
                .collect()
        });
        &ITEMS
    }

    fn response_options(&self) -> &[ResponseOption] {
        static OPTIONS: LazyLock<Vec<ResponseOption>> = LazyLock::new(|| {
            [
                "Not at all",
                "Several days",
                "More than half the days",
                "Nearly every day",
            ]
            .iter()
            .enumerate()
            .map(|(value, label)| ResponseOption {
                value: value as u8,
                label: label.to_string(),
            })
            .collect()
        });
        &OPTIONS
    }

    fn severity_bands(&self) -> &[SeverityBand] {
        &SEVERITY_BANDS
    }
}

/// Validate a raw response object into the fixed nine-item record.
pub fn parse_responses(raw: &Map<String, Value>) -> Result<Phq9Responses, InstrumentError> {
    let errors = Phq9.validate_responses(raw);
    if !errors.is_empty() {
        return Err(InstrumentError::Validation(errors));
    }

    let mut values = [0u8; 9];
    for (slot, item) in values.iter_mut().zip(Phq9.items()) {
        // validate_responses guarantees presence and range
        *slot = raw
            .get(&item.id)
            .and_then(Value::as_u64)
            .and_then(|n| u8::try_from(n).ok())
            .unwrap_or_default();
    }

    Ok(Phq9Responses::from_values(values))
}

/// Sum of the nine item values, 0–27 for validated responses.
pub fn total_score(responses: &Phq9Responses) -> u8 {
    responses
        .values()
        .iter()
        .fold(0u8, |total, value| total.saturating_add(*value))
}

/// Map a total score to its band. Total over `u8`; scores above the top
/// band's bound are severe.
pub fn severity_for(score: u8) -> Severity {
    SEVERITY_BANDS
        .iter()
        .find(|band| score <= band.max_score)
        .map(|band| band.severity)
        .unwrap_or(Severity::Severe)
}

/// Score, classify, and attach recommendations and the crisis flag.
pub fn classify(responses: &Phq9Responses) -> AssessmentResult {
    let score = total_score(responses);
    let severity = severity_for(score);

    AssessmentResult {
        score,
        severity,
        recommendations: recommendations_for(severity)
            .iter()
            .map(|s| s.to_string())
            .collect(),
        trigger_crisis_alert: crisis_alert(score),
    }
}
