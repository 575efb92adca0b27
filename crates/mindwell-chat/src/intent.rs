//! Intent classification by substring match on the lower-cased message.
//!
//! Crisis keywords are checked before every other category and a crisis
//! match always wins, whatever else the message contains. The remaining
//! categories are tried in table order; the first hit wins.

use mindwell_core::models::conversation::Intent;

const CRISIS_KEYWORDS: &[&str] = &[
    "crisis",
    "emergency",
    "suicide",
    "suicidal",
    "kill myself",
    "self-harm",
    "hurt myself",
];

const ROUTES: &[(Intent, &[&str])] = &[
    (Intent::AssessmentRequest, &["assessment", "phq", "test"]),
    (Intent::Anxiety, &["anxious", "anxiety", "worried"]),
    (Intent::Depression, &["depressed", "sad", "down"]),
    (Intent::Stress, &["stress", "overwhelmed", "pressure"]),
    (Intent::Sleep, &["sleep", "tired", "insomnia"]),
];

pub fn classify(message: &str) -> Intent {
    let lower = message.to_lowercase();

    if contains_any(&lower, CRISIS_KEYWORDS) {
        return Intent::Crisis;
    }

    ROUTES
        .iter()
        .find(|(_, keywords)| contains_any(&lower, keywords))
        .map(|(intent, _)| *intent)
        .unwrap_or(Intent::Fallback)
}

fn contains_any(haystack: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| haystack.contains(kw))
}
