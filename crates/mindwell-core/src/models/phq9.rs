use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Item keys of the PHQ-9 questionnaire, in administration order.
pub const PHQ9_KEYS: [&str; 9] = ["q1", "q2", "q3", "q4", "q5", "q6", "q7", "q8", "q9"];

/// A completed PHQ-9 questionnaire. Exactly nine named items, each 0–3.
///
/// Construct through `mindwell_instruments::instruments::phq9::parse_responses`, which
/// enforces the key set and ranges; the fields are public so stored records
/// deserialize without a second validation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Phq9Responses {
    pub q1: u8,
    pub q2: u8,
    pub q3: u8,
    pub q4: u8,
    pub q5: u8,
    pub q6: u8,
    pub q7: u8,
    pub q8: u8,
    pub q9: u8,
}

impl Phq9Responses {
    pub fn from_values(values: [u8; 9]) -> Self {
        let [q1, q2, q3, q4, q5, q6, q7, q8, q9] = values;
        Self {
            q1,
            q2,
            q3,
            q4,
            q5,
            q6,
            q7,
            q8,
            q9,
        }
    }

    pub fn values(&self) -> [u8; 9] {
        [
            self.q1, self.q2, self.q3, self.q4, self.q5, self.q6, self.q7, self.q8, self.q9,
        ]
    }
}
