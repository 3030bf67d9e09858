#![forbid(unsafe_code)]

use crate::domain::{OfficialResult, Prediction};
use crate::score::{ScoreRow, ScoreSummary, Scorecard};
use config::{Config, ScoreMode, SortPolicy};
use std::cmp::Ordering;
use tracing::trace;

pub trait Scorer: Send + Sync {
    /// Produce per-party rows and the aggregate summary.
    fn score(&self, official: &OfficialResult, prediction: &Prediction) -> Scorecard;
}

/// Weighted mean absolute error scorer. Small parties carry proportionally
/// more weight per seat of error than large ones.
#[derive(Debug, Clone)]
pub struct WeightedScorer {
    mode: ScoreMode,
    halflife: f64,
    sort: SortPolicy,
}

impl WeightedScorer {
    pub fn new(config: &Config) -> Self {
        let scoring = config.scoring.clone().sanitize();
        Self {
            mode: scoring.mode,
            halflife: scoring.halflife,
            sort: scoring.sort_by,
        }
    }

    fn transform(&self, wmae: f64, total_seats: u64) -> f64 {
        match self.mode {
            ScoreMode::Linear => (100.0 - 100.0 * wmae / total_seats as f64).max(0.0),
            ScoreMode::Exponential => {
                // score halves each time WMAE grows by one halflife
                let k = std::f64::consts::LN_2 / self.halflife;
                100.0 * (-k * wmae).exp()
            }
        }
    }
}

impl Scorer for WeightedScorer {
    fn score(&self, official: &OfficialResult, prediction: &Prediction) -> Scorecard {
        let mut rows = Vec::with_capacity(official.seats.len());
        let mut sum_weight = 0.0;
        let mut sum_weighted_error = 0.0;

        for (party, &official_count) in &official.seats {
            let predicted = prediction.clamped(party);
            let diff = predicted as i64 - official_count as i64;
            let abs_error = official_count.abs_diff(predicted);
            let weight = 1.0 / (official_count as f64 + 1.0).sqrt();
            let weighted_error = abs_error as f64 * weight;

            sum_weight += weight;
            sum_weighted_error += weighted_error;
            rows.push(ScoreRow {
                party: party.clone(),
                official: official_count,
                predicted,
                diff,
                abs_error,
                weight,
                weighted_error,
            });
        }

        let wmae = if sum_weight > 0.0 {
            sum_weighted_error / sum_weight
        } else {
            0.0
        };
        let total_seats = official.official_sum().max(1);
        let score = self.transform(wmae, total_seats);

        let unknown: Vec<String> = prediction
            .seats
            .keys()
            .filter(|party| !official.seats.contains_key(*party))
            .cloned()
            .collect();
        let missing: Vec<String> = official
            .seats
            .keys()
            .filter(|party| !prediction.seats.contains_key(*party))
            .cloned()
            .collect();

        // Reorders rows only; WMAE and score are plain sums and already fixed.
        match self.sort {
            SortPolicy::WeightedError => rows.sort_by(|a, b| {
                b.weighted_error
                    .partial_cmp(&a.weighted_error)
                    .unwrap_or(Ordering::Equal)
            }),
            SortPolicy::AbsError => rows.sort_by(|a, b| b.abs_error.cmp(&a.abs_error)),
            SortPolicy::OfficialAsc => rows.sort_by(|a, b| a.official.cmp(&b.official)),
        }

        trace!(rows = rows.len(), wmae, score, "scorecard computed");

        Scorecard {
            rows,
            summary: ScoreSummary {
                total_seats,
                wmae,
                score,
                unknown,
                missing,
            },
        }
    }
}
