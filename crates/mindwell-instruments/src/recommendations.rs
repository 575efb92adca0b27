//! Advisory text per severity band.
//!
//! The crisis flag is a function of the numeric score only. It is never
//! derived from a severity band, so an externally overridden band cannot
//! raise or clear it.

use mindwell_core::models::severity::Severity;

/// Total score at or above which a crisis alert is raised.
pub const CRISIS_THRESHOLD: u8 = 15;

const MINIMAL: &[&str] = &["Continue with healthy lifestyle habits and self-care practices."];

const MILD: &[&str] = &[
    "Consider lifestyle changes and stress management techniques.",
    "Monitor your mood and consider speaking with a counselor if symptoms persist.",
];

const MODERATE: &[&str] = &[
    "I strongly recommend scheduling an appointment with one of our counselors.",
    "Consider implementing daily mood tracking and self-care routines.",
];

const URGENT: &[&str] = &[
    "Please schedule an appointment with a counselor as soon as possible.",
    "Consider contacting your healthcare provider or a mental health crisis line.",
];

/// Ordered recommendations for a severity band.
pub fn recommendations_for(severity: Severity) -> &'static [&'static str] {
    match severity {
        Severity::Minimal => MINIMAL,
        Severity::Mild => MILD,
        Severity::Moderate => MODERATE,
        Severity::ModeratelySevere | Severity::Severe => URGENT,
    }
}

pub fn crisis_alert(score: u8) -> bool {
    score >= CRISIS_THRESHOLD
}
