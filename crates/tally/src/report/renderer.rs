#![forbid(unsafe_code)]

use crate::domain::ElectionMeta;
use crate::score::Scorecard;
use crate::validate::ValidationMessage;
use config::ScoreMode;

/// Everything a renderer needs to produce a report.
#[derive(Debug, Clone, Copy)]
pub struct ScoreReport<'a> {
    pub scorecard: &'a Scorecard,
    pub messages: &'a [ValidationMessage],
    pub meta: &'a ElectionMeta,
}

pub trait Renderer: Send + Sync {
    /// Render the full report, trailing newline included.
    fn render(&self, report: &ScoreReport<'_>) -> String;
}

pub(crate) fn mode_name(mode: ScoreMode) -> &'static str {
    match mode {
        ScoreMode::Linear => "linear",
        ScoreMode::Exponential => "exponential",
    }
}

pub(crate) fn subtitle(meta: &ElectionMeta) -> String {
    format!(
        "{} / {}",
        meta.house.as_deref().unwrap_or("-"),
        meta.election_date.as_deref().unwrap_or("-")
    )
}

/// Width of the party column: widest name, at least the header label.
pub(crate) fn party_width(scorecard: &Scorecard) -> usize {
    scorecard
        .rows
        .iter()
        .map(|row| row.party.len())
        .max()
        .unwrap_or(0)
        .max("Party".len())
}
