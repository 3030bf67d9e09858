#![forbid(unsafe_code)]

use indexmap::IndexMap;

/// House name and election date as given by the data source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElectionMeta {
    pub house: Option<String>,
    pub election_date: Option<String>,
}

/// Official election outcome, immutable once loaded.
///
/// The insertion order of `seats` is the source order and is the canonical
/// iteration order for scoring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OfficialResult {
    pub seats: IndexMap<String, u64>,
    pub declared_total: u64,
    pub meta: ElectionMeta,
}

impl OfficialResult {
    pub fn new(seats: IndexMap<String, u64>, declared_total: u64, meta: ElectionMeta) -> Self {
        Self {
            seats,
            declared_total,
            meta,
        }
    }

    /// Sum of the per-party seat counts (not the declared total).
    pub fn official_sum(&self) -> u64 {
        self.seats.values().sum()
    }
}
