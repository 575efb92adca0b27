//! mindwell-instruments
//!
//! Screening instrument definitions and scoring. Pure data and pure
//! functions, no I/O. This crate is the single authoritative classifier:
//! both the persisted submission path and the stateless scoring endpoint
//! call into it.

pub mod error;
pub mod instruments;
pub mod recommendations;
pub mod scoring;

use serde_json::{Map, Value};

use scoring::{Item, ResponseOption, SeverityBand, ValidationError};

/// Trait implemented by each screening instrument.
pub trait Instrument: Send + Sync {
    /// Unique identifier for this instrument (e.g., "phq9").
    fn id(&self) -> &str;

    /// Human-readable name (e.g., "PHQ-9").
    fn name(&self) -> &str;

    /// Questionnaire items in administration order.
    fn items(&self) -> &[Item];

    /// Answer choices shared by every item.
    fn response_options(&self) -> &[ResponseOption];

    /// Total-score breakpoints, lowest band first.
    fn severity_bands(&self) -> &[SeverityBand];

    /// Highest attainable total score.
    fn max_score(&self) -> u8 {
        self.items().iter().map(|item| item.range.max).sum()
    }

    /// Validate a raw JSON response object against this instrument's items.
    ///
    /// Every item must be present exactly once as an integer inside its
    /// range, and no other keys are allowed.
    fn validate_responses(&self, raw: &Map<String, Value>) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        for item in self.items() {
            let Some(value) = raw.get(&item.id) else {
                errors.push(ValidationError {
                    item_id: item.id.clone(),
                    value: None,
                    message: format!("{}: missing response for {}", self.name(), item.id),
                });
                continue;
            };

            match value.as_u64() {
                Some(n) if item.range.contains(n) => {}
                Some(n) => errors.push(ValidationError {
                    item_id: item.id.clone(),
                    value: Some(value.clone()),
                    message: format!(
                        "{}: {} response {} is outside range [{}, {}]",
                        self.name(),
                        item.id,
                        n,
                        item.range.min,
                        item.range.max,
                    ),
                }),
                None => errors.push(ValidationError {
                    item_id: item.id.clone(),
                    value: Some(value.clone()),
                    message: format!(
                        "{}: {} response must be an integer in [{}, {}], got {}",
                        self.name(),
                        item.id,
                        item.range.min,
                        item.range.max,
                        value,
                    ),
                }),
            }
        }

        for key in raw.keys() {
            if !self.items().iter().any(|item| &item.id == key) {
                errors.push(ValidationError {
                    item_id: key.clone(),
                    value: raw.get(key).cloned(),
                    message: format!("{}: unknown item '{}'", self.name(), key),
                });
            }
        }

        errors
    }
}

/// Return all registered instruments.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    vec![Box::new(instruments::phq9::Phq9)]
}

/// Look up an instrument by ID.
pub fn get_instrument(id: &str) -> Option<Box<dyn Instrument>> {
    all_instruments().into_iter().find(|i| i.id() == id)
}
