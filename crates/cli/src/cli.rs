use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use config::{Config, ReportStyle, ScoreMode, SortPolicy};
use std::path::{Path, PathBuf};

/// Seatscore: score a seat-count prediction against the official result
///
/// Compares a predicted per-party seat distribution with the official
/// outcome using a mean absolute error that weights small parties more
/// heavily, and prints a 0-100 score report.
#[derive(Debug, Parser, Clone)]
#[command(about, long_about, version)]
pub(crate) struct Cli {
    /// Path to the official results JSON file.
    #[arg(required_unless_present = "dump_config")]
    pub(crate) official: Option<PathBuf>,

    /// Path to the prediction JSON file (party -> predicted seats).
    #[arg(required_unless_present = "dump_config")]
    pub(crate) prediction: Option<PathBuf>,

    /// Path to configuration file.
    #[arg(short, long, value_parser = validate_file)]
    pub(crate) conffile: Option<PathBuf>,

    /// Scoring transform: "linear" or "exponential".
    #[arg(long, value_parser = parse_mode)]
    pub(crate) mode: Option<ScoreMode>,

    /// WMAE at which the exponential score halves.
    #[arg(long, value_parser = validate_halflife)]
    pub(crate) halflife: Option<f64>,

    /// Row order: "weighted_error", "abs_error" or "official_asc".
    #[arg(long, value_parser = parse_sort)]
    pub(crate) sort_by: Option<SortPolicy>,

    /// Keep scoring when the prediction total does not match the declared
    /// total (it is reported as a warning instead of an error).
    #[arg(long)]
    pub(crate) allow_mismatch: bool,

    /// Force the plain renderer even on a terminal.
    #[arg(long)]
    pub(crate) plain: bool,

    /// Write the default configuration as TOML to this path and exit.
    #[arg(long)]
    pub(crate) dump_config: Option<PathBuf>,

    #[command(flatten)]
    pub(crate) verbosity: Verbosity<WarnLevel>,
}

impl Cli {
    /// Overlay command-line overrides onto the loaded configuration.
    pub(crate) fn apply(&self, config: &mut Config) {
        if let Some(mode) = self.mode {
            config.scoring.mode = mode;
        }
        if let Some(halflife) = self.halflife {
            config.scoring.halflife = halflife;
        }
        if let Some(sort_by) = self.sort_by {
            config.scoring.sort_by = sort_by;
        }
        if self.allow_mismatch {
            config.scoring.allow_mismatch = true;
        }
        if self.plain {
            config.report.style = ReportStyle::Plain;
        }
    }
}

/// Check if the file exists.
#[inline(always)]
fn validate_file(file: &str) -> Result<PathBuf, String> {
    let path = Path::new(file);
    if path.exists() {
        Ok(path.to_owned())
    } else {
        Err(format!("File not found: {:?}", path))
    }
}

fn parse_mode(mode: &str) -> Result<ScoreMode, String> {
    match mode {
        "linear" => Ok(ScoreMode::Linear),
        "exponential" | "exp" => Ok(ScoreMode::Exponential),
        _ => Err(format!(
            "`{mode}` is not a score mode (expected `linear` or `exponential`)"
        )),
    }
}

fn parse_sort(policy: &str) -> Result<SortPolicy, String> {
    match policy {
        "weighted_error" => Ok(SortPolicy::WeightedError),
        "abs_error" => Ok(SortPolicy::AbsError),
        "official_asc" => Ok(SortPolicy::OfficialAsc),
        _ => Err(format!(
            "`{policy}` is not a sort policy (expected `weighted_error`, `abs_error` or `official_asc`)"
        )),
    }
}

fn validate_halflife(value: &str) -> Result<f64, String> {
    let halflife: f64 = value
        .parse()
        .map_err(|_| format!("`{value}` is not a valid number"))?;
    if halflife.is_finite() && halflife > 0.0 {
        Ok(halflife)
    } else {
        Err("halflife must be a positive number".to_string())
    }
}
