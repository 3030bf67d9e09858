use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(#[from] config::Error),

    #[error("scoring error: {0}")]
    Tally(#[from] tally::Error),

    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),

    #[error("official and prediction files are required")]
    MissingInput,
}

impl Error {
    /// Exit status for this failure: 2 for inconsistent official data, 3 for
    /// a strict-mode prediction mismatch, 1 for everything else (data load,
    /// config, I/O).
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Tally(tally::Error::OfficialSumMismatch { .. }) => 2,
            Self::Tally(tally::Error::PredictionSumMismatch { .. }) => 3,
            _ => 1,
        }
    }
}
