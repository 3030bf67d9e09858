#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};

/// Row ordering of the rendered score table. Never affects the score itself.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortPolicy {
    #[default]
    WeightedError,
    AbsError,
    OfficialAsc,
}
