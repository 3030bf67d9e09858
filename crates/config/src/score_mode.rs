#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};

/// Transform applied to WMAE to obtain a 0-100 score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ScoreMode {
    /// `100 - 100 * WMAE / S`, floored at 0.
    Linear,
    /// `100 * exp(-ln(2) / halflife * WMAE)`; reaches 50 at WMAE = halflife.
    #[default]
    #[serde(alias = "exp")]
    Exponential,
}
