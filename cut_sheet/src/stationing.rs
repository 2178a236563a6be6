//! Station sets and regular interval stationing.

use crate::error::{CutSheetError, Result};

/// Upper bound on the number of regular stations generated in one pass.
pub const MAX_REGULAR_STATIONS: u64 = 1_000_000;

/// Ascending set of distinct station values.
///
/// Duplicates are detected with exact `==` comparison; `-0.0` is stored as
/// `0.0`. Values are expected to be finite.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
#[serde(transparent)]
pub struct StationSet {
    stations: Vec<f64>,
}

impl StationSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from arbitrary values, sorting and collapsing duplicates.
    pub fn from_values<I: IntoIterator<Item = f64>>(values: I) -> Self {
        let mut stations: Vec<f64> = values.into_iter().map(normalize).collect();
        stations.sort_by(|a, b| a.total_cmp(b));
        stations.dedup_by(|a, b| a == b);
        Self { stations }
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    pub fn contains(&self, station: f64) -> bool {
        self.position(station).is_ok()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.stations
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.stations.iter().copied()
    }

    /// Inserts `station` keeping the set ordered. Returns `false` when the
    /// value was already present.
    pub(crate) fn insert(&mut self, station: f64) -> bool {
        let station = normalize(station);
        match self.position(station) {
            Ok(_) => false,
            Err(idx) => {
                self.stations.insert(idx, station);
                true
            }
        }
    }

    pub(crate) fn remove(&mut self, station: f64) -> bool {
        match self.position(normalize(station)) {
            Ok(idx) => {
                self.stations.remove(idx);
                true
            }
            Err(_) => false,
        }
    }

    pub(crate) fn clear(&mut self) {
        self.stations.clear();
    }

    fn position(&self, station: f64) -> std::result::Result<usize, usize> {
        let station = normalize(station);
        self.stations.binary_search_by(|s| s.total_cmp(&station))
    }
}

impl IntoIterator for StationSet {
    type Item = f64;
    type IntoIter = std::vec::IntoIter<f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.stations.into_iter()
    }
}

/// Folds negative zero into positive zero so that `total_cmp` ordering agrees
/// with `==` for every finite value.
fn normalize(station: f64) -> f64 {
    station + 0.0
}

/// Generates stations from `begin` in steps of `increment`.
///
/// Stations are computed as `begin + i * increment` and kept while they do
/// not exceed `end + increment`, so the end station is always reached even
/// when the steps do not divide the span evenly. In that case the last
/// station lies beyond `end`. An `end` before `begin` gives at most the begin
/// station.
pub fn regular_stations(begin: f64, end: f64, increment: f64) -> Result<StationSet> {
    if !increment.is_finite() || increment <= 0.0 {
        return Err(CutSheetError::InvalidIncrement { increment });
    }
    let bound = end + increment;
    let span = bound - begin;
    if span < 0.0 {
        return Ok(StationSet::new());
    }
    let estimate = (span / increment).floor() + 1.0;
    if !estimate.is_finite() || estimate > MAX_REGULAR_STATIONS as f64 {
        return Err(CutSheetError::StationLimitExceeded {
            count: if estimate.is_finite() {
                estimate as u64
            } else {
                u64::MAX
            },
            limit: MAX_REGULAR_STATIONS,
        });
    }

    let mut stations = Vec::with_capacity(estimate as usize + 1);
    let mut i = 0u64;
    loop {
        let station = begin + i as f64 * increment;
        if station > bound {
            break;
        }
        let station = normalize(station);
        // Steps below the spacing of f64 at large stations round to the
        // previous value.
        if stations.last().map_or(true, |last| station > *last) {
            stations.push(station);
        }
        i += 1;
    }
    log::debug!(
        "generated {} regular stations from {begin} to {end} every {increment}",
        stations.len()
    );
    Ok(StationSet { stations })
}
