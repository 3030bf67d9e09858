#![forbid(unsafe_code)]

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read data file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed data file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("negative seat count in official data: {party}={seats}")]
    NegativeSeats { party: String, seats: i64 },

    #[error("negative declared total: {0}")]
    NegativeTotal(i64),

    #[error("official seat counts sum to {actual} but the declared total is {declared}")]
    OfficialSumMismatch { declared: u64, actual: u64 },

    #[error("prediction sums to {predicted} but the declared total is {declared}")]
    PredictionSumMismatch { declared: u64, predicted: u64 },
}
