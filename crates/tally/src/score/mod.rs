#![forbid(unsafe_code)]

mod scorer;
mod types;

pub use scorer::{Scorer, WeightedScorer};
pub use types::{ScoreRow, ScoreSummary, Scorecard};
