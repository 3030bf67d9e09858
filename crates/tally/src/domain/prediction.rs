#![forbid(unsafe_code)]

use indexmap::IndexMap;

/// Caller-supplied seat prediction. Values may be negative; scoring treats
/// anything below 0 as 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Prediction {
    pub seats: IndexMap<String, i64>,
}

impl Prediction {
    pub fn new(seats: IndexMap<String, i64>) -> Self {
        Self { seats }
    }

    /// Predicted count for a party, negatives clamped to 0, absent parties 0.
    pub fn clamped(&self, party: &str) -> u64 {
        self.seats.get(party).copied().unwrap_or(0).max(0) as u64
    }

    /// Sum of predicted counts with negatives clamped to 0.
    pub fn clamped_sum(&self) -> u64 {
        self.seats.values().map(|&v| v.max(0) as u64).sum()
    }
}
