#![forbid(unsafe_code)]

use crate::report::renderer::{Renderer, ScoreReport, mode_name, party_width, subtitle};
use config::{Config, ScoreMode};
use itertools::Itertools;
use std::cmp::Ordering;

const RESET: &str = "\x1b[0m";
const BOLD_CYAN: &str = "\x1b[1;36m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const BLUE: &str = "\x1b[34m";

/// ANSI-styled table for interactive terminals. Over-predictions are red,
/// under-predictions blue, exact rows green.
#[derive(Debug, Clone)]
pub struct AnsiRenderer {
    mode: ScoreMode,
    halflife: f64,
}

impl AnsiRenderer {
    pub fn new(config: &Config) -> Self {
        let scoring = config.scoring.clone().sanitize();
        Self {
            mode: scoring.mode,
            halflife: scoring.halflife,
        }
    }
}

impl Renderer for AnsiRenderer {
    fn render(&self, report: &ScoreReport<'_>) -> String {
        let summary = &report.scorecard.summary;
        let mut out = String::new();

        out.push_str(&format!(
            "{BOLD_CYAN}=== Seat prediction score ({}) ==={RESET}\n\n",
            subtitle(report.meta)
        ));

        if !summary.unknown.is_empty() {
            out.push_str(&format!(
                "{YELLOW}note: parties not in the official result (excluded from scoring): {}{RESET}\n",
                summary.unknown.iter().join(", ")
            ));
        }
        if !summary.missing.is_empty() {
            out.push_str(&format!(
                "{YELLOW}note: parties missing from the prediction are scored as 0: {}{RESET}\n",
                summary.missing.iter().join(", ")
            ));
        }
        for message in report.messages {
            if message.is_blocking() {
                out.push_str(&format!("{RED}error: {message}{RESET}\n"));
            } else {
                out.push_str(&format!("{YELLOW}warning: {message}{RESET}\n"));
            }
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
            // pad before styling so escape codes do not skew the column
            let diff_cell = format!("{:>+6}", row.diff);
            let diff_color = match row.diff.cmp(&0) {
                Ordering::Equal => GREEN,
                Ordering::Greater => RED,
                Ordering::Less => BLUE,
            };
            out.push_str(&format!(
                "{:<width$} {:>8} {:>6} {diff_color}{diff_cell}{RESET} {:>5} {:>8.3} {:>8.3}\n",
                row.party, row.official, row.predicted, row.abs_error, row.weight, row.weighted_error
            ));
        }

        out.push_str("\n-- Summary --\n");
        out.push_str(&format!("Total seats (S) : {}\n", summary.total_seats));
        out.push_str(&format!("WMAE            : {:.4}\n", summary.wmae));
        out.push_str(&format!(
            "Score ({}) : {BOLD_CYAN}{:.2}{RESET}\n",
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
