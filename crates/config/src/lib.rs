#![forbid(unsafe_code)]

mod error;
mod report;
mod score_mode;
mod scoring;
mod sort_policy;

pub use error::Error;
pub use report::{Report, ReportStyle};
pub use score_mode::ScoreMode;
pub use scoring::{MIN_HALFLIFE, Scoring};
pub use sort_policy::SortPolicy;

use figment::{
    Figment,
    providers::{Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub scoring: Scoring,
    pub report: Report,
}

impl Config {
    /// Built-in defaults, no file involved.
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overlaid with a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let config: Self = Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(path.as_ref()))
            .extract()?;
        if !(config.scoring.halflife.is_finite() && config.scoring.halflife > 0.0) {
            return Err(Error::InvalidHalflife(config.scoring.halflife));
        }
        Ok(config)
    }

    /// Write this configuration as TOML, e.g. to bootstrap a config file.
    pub fn dump(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        let toml = toml_edit::ser::to_string_pretty(self)?;
        std::fs::write(path, toml)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_without_file() {
        let config = Config::new();
        assert_eq!(config.scoring.mode, ScoreMode::Exponential);
        assert_eq!(config.scoring.halflife, 5.0);
        assert_eq!(config.scoring.sort_by, SortPolicy::WeightedError);
        assert!(!config.scoring.allow_mismatch);
        assert_eq!(config.report.style, ReportStyle::Auto);
    }

    #[test]
    fn load_overlays_file_on_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[scoring]\nmode = \"linear\"\nallow_mismatch = true\n\n[report]\nstyle = \"plain\""
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.scoring.mode, ScoreMode::Linear);
        assert!(config.scoring.allow_mismatch);
        // untouched keys keep their defaults
        assert_eq!(config.scoring.halflife, 5.0);
        assert_eq!(config.report.style, ReportStyle::Plain);
    }

    #[test]
    fn load_accepts_exp_alias() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[scoring]\nmode = \"exp\"").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.scoring.mode, ScoreMode::Exponential);
    }

    #[test]
    fn load_rejects_non_positive_halflife() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[scoring]\nhalflife = -2.0").unwrap();

        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, Error::InvalidHalflife(h) if h == -2.0));
    }

    #[test]
    fn dump_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seatscore.toml");

        let mut config = Config::new();
        config.scoring.sort_by = SortPolicy::OfficialAsc;
        config.dump(&path).unwrap();

        assert_eq!(Config::load(&path).unwrap(), config);
    }
}
