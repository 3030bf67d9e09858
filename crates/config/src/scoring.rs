#![forbid(unsafe_code)]

use crate::{ScoreMode, SortPolicy};
use serde::{Deserialize, Serialize};

/// Smallest halflife the exponential transform will accept.
pub const MIN_HALFLIFE: f64 = 1e-9;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Scoring {
    /// Transform from WMAE to a 0-100 score.
    pub mode: ScoreMode,

    /// WMAE at which the exponential score halves. Ignored in linear mode.
    pub halflife: f64,

    /// Row ordering of the rendered table.
    pub sort_by: SortPolicy,

    /// Continue scoring (with a warning) when the prediction total does not
    /// match the declared total.
    pub allow_mismatch: bool,
}

impl Default for Scoring {
    fn default() -> Self {
        Self {
            mode: ScoreMode::Exponential,
            halflife: 5.0,
            sort_by: SortPolicy::WeightedError,
            allow_mismatch: false,
        }
    }
}

impl Scoring {
    /// Clamp the halflife to a positive value.
    pub fn sanitize(self) -> Self {
        Self {
            halflife: if self.halflife.is_finite() {
                self.halflife.max(MIN_HALFLIFE)
            } else {
                MIN_HALFLIFE
            },
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn sanitize_yields_positive_halflife(halflife in -1000.0f64..1000.0) {
            let scoring = Scoring { halflife, ..Scoring::default() }.sanitize();
            prop_assert!(scoring.halflife >= MIN_HALFLIFE);
        }
    }

    #[test]
    fn sanitize_handles_non_finite() {
        let scoring = Scoring {
            halflife: f64::NAN,
            ..Scoring::default()
        }
        .sanitize();
        assert_eq!(scoring.halflife, MIN_HALFLIFE);
    }
}
