//! Custom station input: comma separated text and the caller-held
//! accumulator.

use crate::error::{CutSheetError, Result};
use crate::stationing::StationSet;

/// How a computation pass treats a custom station list with bad tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MalformedPolicy {
    /// Drop the entire custom table when any token is malformed.
    Omit,
    /// Keep every valid token and leave out only the malformed ones.
    #[default]
    SkipInvalid,
}

fn parse_token(token: &str) -> Option<f64> {
    token.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parses comma separated stations keeping the valid values and collecting
/// the tokens that are not finite numbers.
///
/// Empty or whitespace-only input gives an empty set with no error. An empty
/// token between commas counts as malformed.
pub fn parse_custom_stations_lenient(raw: &str) -> (StationSet, Option<CutSheetError>) {
    if raw.trim().is_empty() {
        return (StationSet::new(), None);
    }
    let mut values = Vec::new();
    let mut bad = Vec::new();
    for token in raw.split(',') {
        match parse_token(token) {
            Some(v) => values.push(v),
            None => bad.push(token.trim().to_string()),
        }
    }
    let err = if bad.is_empty() {
        None
    } else {
        Some(CutSheetError::MalformedStationList { tokens: bad })
    };
    (StationSet::from_values(values), err)
}

/// Parses comma separated stations, failing if any token is malformed.
pub fn parse_custom_stations(raw: &str) -> Result<StationSet> {
    match parse_custom_stations_lenient(raw) {
        (_, Some(err)) => Err(err),
        (set, None) => Ok(set),
    }
}

/// Custom stations accumulated one at a time between computation passes.
///
/// The set stays sorted; adding a station already present is a no-op.
#[derive(Debug, Clone, Default)]
pub struct CustomStations {
    stations: StationSet,
}

impl CustomStations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a station, returning whether it was newly inserted.
    pub fn add(&mut self, station: f64) -> Result<bool> {
        if !station.is_finite() {
            return Err(CutSheetError::NonFiniteInput {
                field: "custom station",
            });
        }
        Ok(self.stations.insert(station))
    }

    /// Parses `token` and adds it.
    pub fn add_str(&mut self, token: &str) -> Result<bool> {
        let station = parse_token(token).ok_or_else(|| CutSheetError::MalformedStationList {
            tokens: vec![token.trim().to_string()],
        })?;
        self.add(station)
    }

    pub fn remove(&mut self, station: f64) -> bool {
        self.stations.remove(station)
    }

    pub fn clear(&mut self) {
        self.stations.clear();
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.stations.iter()
    }

    pub fn to_station_set(&self) -> StationSet {
        self.stations.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_sorted_unique() {
        let set = parse_custom_stations(" 85, 25 ,45,25").unwrap();
        assert_eq!(set.as_slice(), &[25.0, 45.0, 85.0]);
    }

    #[test]
    fn blank_input_is_empty() {
        assert!(parse_custom_stations("").unwrap().is_empty());
        assert!(parse_custom_stations("   \t").unwrap().is_empty());
    }

    #[test]
    fn strict_names_bad_tokens() {
        let err = parse_custom_stations("25,abc,45, x1 ").unwrap_err();
        match err {
            CutSheetError::MalformedStationList { tokens } => {
                assert_eq!(tokens, vec!["abc".to_string(), "x1".to_string()])
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn lenient_keeps_good_tokens() {
        let (set, err) = parse_custom_stations_lenient("25,abc,45");
        assert_eq!(set.as_slice(), &[25.0, 45.0]);
        assert!(matches!(err, Some(CutSheetError::MalformedStationList { .. })));
    }

    #[test]
    fn empty_and_non_finite_tokens_are_malformed() {
        let (set, err) = parse_custom_stations_lenient("10,,nan,inf,20,");
        assert_eq!(set.as_slice(), &[10.0, 20.0]);
        match err {
            Some(CutSheetError::MalformedStationList { tokens }) => assert_eq!(tokens.len(), 4),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn accumulator_add_is_idempotent() {
        let mut acc = CustomStations::new();
        assert!(acc.add(45.0).unwrap());
        assert!(acc.add(25.0).unwrap());
        assert!(!acc.add(45.0).unwrap());
        assert_eq!(acc.iter().collect::<Vec<_>>(), vec![25.0, 45.0]);
        acc.clear();
        assert!(acc.is_empty());
    }

    #[test]
    fn accumulator_rejects_bad_values() {
        let mut acc = CustomStations::new();
        assert!(acc.add(f64::NAN).is_err());
        assert!(acc.add_str("twelve").is_err());
        assert!(acc.add_str(" 12.5 ").unwrap());
        assert_eq!(acc.len(), 1);
        assert!(acc.remove(12.5));
    }
}
