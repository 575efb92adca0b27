use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// PHQ-9 severity band, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum Severity {
    Minimal,
    Mild,
    Moderate,
    ModeratelySevere,
    Severe,
}

impl Severity {
    pub const ALL: [Severity; 5] = [
        Severity::Minimal,
        Severity::Mild,
        Severity::Moderate,
        Severity::ModeratelySevere,
        Severity::Severe,
    ];

    /// Wire label, identical to the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Minimal => "minimal",
            Severity::Mild => "mild",
            Severity::Moderate => "moderate",
            Severity::ModeratelySevere => "moderately-severe",
            Severity::Severe => "severe",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lenient parse: case-insensitive, trimmed, with spaces and underscores
/// treated as hyphens. Accepts "Moderately Severe" as well as
/// "moderately-severe".
impl FromStr for Severity {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .to_lowercase()
            .split(|c: char| c.is_whitespace() || c == '_' || c == '-')
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join("-");

        Severity::ALL
            .into_iter()
            .find(|severity| severity.as_str() == normalized)
            .ok_or_else(|| CoreError::InvalidSeverity(s.to_string()))
    }
}
