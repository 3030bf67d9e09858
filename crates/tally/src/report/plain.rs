#![forbid(unsafe_code)]

use crate::report::renderer::{Renderer, ScoreReport, mode_name, party_width, subtitle};
use config::{Config, ScoreMode};
use itertools::Itertools;

/// Unstyled fixed-width table, safe for pipes and logs.
#[derive(Debug, Clone)]
pub struct PlainRenderer {
    mode: ScoreMode,
    halflife: f64,
}

impl PlainRenderer {
    pub fn new(config: &Config) -> Self {
        let scoring = config.scoring.clone().sanitize();
        Self {
            mode: scoring.mode,
            halflife: scoring.halflife,
        }
    }
}

impl Renderer for PlainRenderer {
    fn render(&self, report: &ScoreReport<'_>) -> String {
        let summary = &report.scorecard.summary;
        let mut out = String::new();

        out.push_str(&format!(
            "=== Seat prediction score ({}) ===\n\n",
            subtitle(report.meta)
        ));

        if !summary.unknown.is_empty() {
            out.push_str(&format!(
                "note: parties not in the official result (excluded from scoring): {}\n",
                summary.unknown.iter().join(", ")
            ));
        }
        if !summary.missing.is_empty() {
            out.push_str(&format!(
                "note: parties missing from the prediction are scored as 0: {}\n",
                summary.missing.iter().join(", ")
            ));
        }
        for message in report.messages {
            let severity = if message.is_blocking() {
                "error"
            } else {
                "warning"
            };
            out.push_str(&format!("{severity}: {message}\n"));
        }
        out.push('\n');

        let width = party_width(report.scorecard);
        out.push_str(&format!(
            "{:<width$} {:>8} {:>6} {:>6} {:>5} {:>8} {:>8}\n",
            "Party", "Official", "Pred", "Diff", "Abs", "Weight", "W-Err"
        ));
        out.push_str(&"-".repeat(width + 47));
        out.push('\n');

        for row in &report.scorecard.rows {
            out.push_str(&format!(
                "{:<width$} {:>8} {:>6} {:>+6} {:>5} {:>8.3} {:>8.3}\n",
                row.party,
                row.official,
                row.predicted,
                row.diff,
                row.abs_error,
                row.weight,
                row.weighted_error
            ));
        }

        out.push_str("\n-- Summary --\n");
        out.push_str(&format!("Total seats (S) : {}\n", summary.total_seats));
        out.push_str(&format!("WMAE            : {:.4}\n", summary.wmae));
        out.push_str(&format!(
            "Score ({}) : {:.2}\n",
            mode_name(self.mode),
            summary.score
        ));
        if self.mode == ScoreMode::Exponential {
            out.push_str(&format!(
                "(half-life = {}, k = {:.4})\n",
                self.halflife,
                std::f64::consts::LN_2 / self.halflife
            ));
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ElectionMeta, OfficialResult, Prediction};
    use crate::score::{Scorer, WeightedScorer};
    use crate::validate::validate_totals;
    use indexmap::IndexMap;

    fn fixture() -> (OfficialResult, Prediction) {
        let official = OfficialResult::new(
            IndexMap::from([("Alpha".to_string(), 10), ("Beta".to_string(), 1)]),
            11,
            ElectionMeta {
                house: Some("Upper House".to_string()),
                election_date: Some("2025-07-20".to_string()),
            },
        );
        let prediction = Prediction::new(IndexMap::from([
            ("Alpha".to_string(), 8),
            ("Beta".to_string(), 1),
            ("Gamma".to_string(), 0),
        ]));
        (official, prediction)
    }

    #[test]
    fn plain_report_has_table_and_summary() {
        let (official, prediction) = fixture();
        let config = Config::new();
        let scorecard = WeightedScorer::new(&config).score(&official, &prediction);
        let validation = validate_totals(&official, &prediction, true);

        let rendered = PlainRenderer::new(&config).render(&ScoreReport {
            scorecard: &scorecard,
            messages: &validation.messages,
            meta: &official.meta,
        });

        assert!(rendered.contains("Upper House / 2025-07-20"));
        assert!(rendered.contains("excluded from scoring): Gamma"));
        assert!(rendered.contains("warning: prediction sums to 9"));
        assert!(rendered.contains("Alpha"));
        assert!(rendered.contains("Total seats (S) : 11"));
        assert!(rendered.contains("Score (exponential)"));
        assert!(rendered.contains("half-life = 5"));
        assert!(!rendered.contains('\x1b'));
    }

    #[test]
    fn linear_summary_omits_halflife() {
        let (official, prediction) = fixture();
        let mut config = Config::new();
        config.scoring.mode = ScoreMode::Linear;
        let scorecard = WeightedScorer::new(&config).score(&official, &prediction);

        let rendered = PlainRenderer::new(&config).render(&ScoreReport {
            scorecard: &scorecard,
            messages: &[],
            meta: &official.meta,
        });

        assert!(rendered.contains("Score (linear)"));
        assert!(!rendered.contains("half-life"));
    }
}
