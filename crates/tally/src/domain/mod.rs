#![forbid(unsafe_code)]

mod official;
mod prediction;

pub use official::{ElectionMeta, OfficialResult};
pub use prediction::Prediction;
