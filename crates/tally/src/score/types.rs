#![forbid(unsafe_code)]

/// One row per party in the official set.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreRow {
    pub party: String,
    pub official: u64,
    /// Predicted count with negatives clamped to 0; 0 when absent.
    pub predicted: u64,
    /// Signed predicted - official.
    pub diff: i64,
    pub abs_error: u64,
    /// `1 / sqrt(official + 1)`, larger for small parties.
    pub weight: f64,
    pub weighted_error: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreSummary {
    /// Total official seats, floored at 1.
    pub total_seats: u64,
    pub wmae: f64,
    pub score: f64,
    /// Predicted parties absent from the official set, excluded from WMAE.
    pub unknown: Vec<String>,
    /// Official parties absent from the prediction, scored as predicted 0.
    pub missing: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scorecard {
    pub rows: Vec<ScoreRow>,
    pub summary: ScoreSummary,
}
