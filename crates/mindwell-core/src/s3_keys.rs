//! S3 key/path conventions.
//!
//! Pure string functions, no AWS SDK dependency. These define the canonical
//! layout of objects in the Mindwell bucket. Every assessment lives under its
//! subject's prefix so a subject's history is a single prefix listing.

use uuid::Uuid;

use crate::error::CoreError;

pub const ASSESSMENTS_PREFIX: &str = "assessments/";

pub fn assessment(subject_id: &str, id: Uuid) -> String {
    format!("{ASSESSMENTS_PREFIX}{subject_id}/{id}.json")
}

pub fn subject_assessments_prefix(subject_id: &str) -> String {
    format!("{ASSESSMENTS_PREFIX}{subject_id}/")
}

/// Subject ids become a path segment, so only a conservative character set
/// is accepted.
pub fn validate_subject_id(subject_id: &str) -> Result<(), CoreError> {
    let valid = !subject_id.is_empty()
        && subject_id.len() <= 128
        && subject_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

    if valid {
        Ok(())
    } else {
        Err(CoreError::InvalidSubject(subject_id.to_string()))
    }
}
