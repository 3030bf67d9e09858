#![forbid(unsafe_code)]

use crate::domain::{ElectionMeta, OfficialResult, Prediction};
use crate::error::Error;
use indexmap::IndexMap;
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct RawOfficial {
    seats_by_party: IndexMap<String, i64>,
    total_seats: i64,
    #[serde(default)]
    house: Option<String>,
    #[serde(default)]
    election_date: Option<String>,
}

/// Load the official result from a JSON file.
///
/// Required keys: `seats_by_party` (party -> seat count object) and
/// `total_seats`. `house` and `election_date` are optional metadata.
/// Negative values are rejected here; everything downstream works with
/// unsigned counts.
pub fn load_official(path: impl AsRef<Path>) -> Result<OfficialResult, Error> {
    let file = File::open(path.as_ref())?;
    let raw: RawOfficial = serde_json::from_reader(BufReader::new(file))?;

    let mut seats = IndexMap::with_capacity(raw.seats_by_party.len());
    for (party, count) in raw.seats_by_party {
        if count < 0 {
            return Err(Error::NegativeSeats {
                party,
                seats: count,
            });
        }
        seats.insert(party, count as u64);
    }

    let declared_total =
        u64::try_from(raw.total_seats).map_err(|_| Error::NegativeTotal(raw.total_seats))?;

    debug!(
        parties = seats.len(),
        declared_total, "official result loaded"
    );

    Ok(OfficialResult::new(
        seats,
        declared_total,
        ElectionMeta {
            house: raw.house,
            election_date: raw.election_date,
        },
    ))
}

/// Load a prediction from a JSON file holding a single party -> seats object.
///
/// Negative values are accepted; scoring clamps them to 0.
pub fn load_prediction(path: impl AsRef<Path>) -> Result<Prediction, Error> {
    let file = File::open(path.as_ref())?;
    let seats: IndexMap<String, i64> = serde_json::from_reader(BufReader::new(file))?;

    debug!(parties = seats.len(), "prediction loaded");

    Ok(Prediction::new(seats))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn load_official_preserves_source_order() {
        let file = write_file(
            r#"{
                "seats_by_party": {"C": 20, "A": 50, "B": 30},
                "total_seats": 100,
                "house": "Upper House",
                "election_date": "2025-07-20"
            }"#,
        );

        let official = load_official(file.path()).unwrap();
        let order: Vec<_> = official.seats.keys().cloned().collect();
        assert_eq!(order, ["C", "A", "B"]);
        assert_eq!(official.declared_total, 100);
        assert_eq!(official.meta.house.as_deref(), Some("Upper House"));
        assert_eq!(official.meta.election_date.as_deref(), Some("2025-07-20"));
    }

    #[test]
    fn load_official_metadata_is_optional() {
        let file = write_file(r#"{"seats_by_party": {"A": 1}, "total_seats": 1}"#);

        let official = load_official(file.path()).unwrap();
        assert_eq!(official.meta, ElectionMeta::default());
    }

    #[test]
    fn load_official_rejects_missing_total() {
        let file = write_file(r#"{"seats_by_party": {"A": 1}}"#);

        assert!(matches!(
            load_official(file.path()),
            Err(Error::Json(_))
        ));
    }

    #[test]
    fn load_official_rejects_negative_seats() {
        let file = write_file(r#"{"seats_by_party": {"A": -3}, "total_seats": 10}"#);

        assert!(matches!(
            load_official(file.path()),
            Err(Error::NegativeSeats { party, seats: -3 }) if party == "A"
        ));
    }

    #[test]
    fn load_official_rejects_negative_total() {
        let file = write_file(r#"{"seats_by_party": {"A": 3}, "total_seats": -10}"#);

        assert!(matches!(
            load_official(file.path()),
            Err(Error::NegativeTotal(-10))
        ));
    }

    #[test]
    fn load_prediction_keeps_negative_values() {
        let file = write_file(r#"{"A": 5, "B": -2}"#);

        let prediction = load_prediction(file.path()).unwrap();
        assert_eq!(prediction.seats["B"], -2);
        assert_eq!(prediction.clamped("B"), 0);
        assert_eq!(prediction.clamped_sum(), 5);
    }
}
