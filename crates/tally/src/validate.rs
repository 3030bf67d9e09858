#![forbid(unsafe_code)]

use crate::domain::{OfficialResult, Prediction};
use crate::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationMessage {
    OfficialSumMismatch {
        declared: u64,
        actual: u64,
    },
    PredictionSumMismatch {
        declared: u64,
        predicted: u64,
        lenient: bool,
    },
}

impl ValidationMessage {
    pub fn is_blocking(&self) -> bool {
        match self {
            Self::OfficialSumMismatch { .. } => true,
            Self::PredictionSumMismatch { lenient, .. } => !lenient,
        }
    }
}

impl fmt::Display for ValidationMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OfficialSumMismatch { declared, actual } => write!(
                f,
                "official seat counts sum to {actual} but the declared total is {declared}"
            ),
            Self::PredictionSumMismatch {
                declared,
                predicted,
                lenient: false,
            } => write!(
                f,
                "prediction sums to {predicted} but the declared total is {declared}"
            ),
            Self::PredictionSumMismatch {
                declared,
                predicted,
                lenient: true,
            } => write!(
                f,
                "prediction sums to {predicted} but the declared total is {declared}; scoring continues"
            ),
        }
    }
}

/// Outcome of the total checks, messages in the order the checks ran.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Validation {
    pub messages: Vec<ValidationMessage>,
}

impl Validation {
    /// True when scoring may proceed.
    pub fn ok(&self) -> bool {
        self.messages.iter().all(|m| !m.is_blocking())
    }

    /// First blocking message mapped to the matching error, if any.
    pub fn blocking_error(&self) -> Option<Error> {
        self.messages
            .iter()
            .find(|m| m.is_blocking())
            .map(|m| match *m {
                ValidationMessage::OfficialSumMismatch { declared, actual } => {
                    Error::OfficialSumMismatch { declared, actual }
                }
                ValidationMessage::PredictionSumMismatch {
                    declared,
                    predicted,
                    ..
                } => Error::PredictionSumMismatch {
                    declared,
                    predicted,
                },
            })
    }
}

/// Check both seat totals against the declared total.
///
/// An official-sum mismatch always blocks. A prediction-sum mismatch blocks
/// only when `allow_mismatch` is false; otherwise it degrades to a warning
/// and scoring proceeds with the counts as given.
pub fn validate_totals(
    official: &OfficialResult,
    prediction: &Prediction,
    allow_mismatch: bool,
) -> Validation {
    let mut messages = Vec::new();

    let official_sum = official.official_sum();
    if official_sum != official.declared_total {
        messages.push(ValidationMessage::OfficialSumMismatch {
            declared: official.declared_total,
            actual: official_sum,
        });
    }

    let predicted_sum = prediction.clamped_sum();
    if predicted_sum != official.declared_total {
        messages.push(ValidationMessage::PredictionSumMismatch {
            declared: official.declared_total,
            predicted: predicted_sum,
            lenient: allow_mismatch,
        });
    }

    Validation { messages }
}
