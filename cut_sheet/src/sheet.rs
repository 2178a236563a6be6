//! One computation pass from parameters to a finished cut sheet.
//!
//! A pass evaluates the grade at the regular interval stations and at the
//! custom stations, then merges both tables. Problems confined to one of the
//! tables (a bad interval, malformed custom tokens) are reported alongside
//! the result instead of aborting the pass.

use crate::custom::{parse_custom_stations_lenient, CustomStations, MalformedPolicy};
use crate::error::{CutSheetError, Result};
use crate::grade::Grade;
use crate::params::{CutSheetOptions, CutSheetParams};
use crate::slope::Slope;
use crate::stationing::{regular_stations, StationSet};
use crate::table::{CutSheet, Row};

/// Where the custom stations of a pass come from.
#[derive(Debug, Clone, Copy, Default)]
pub enum CustomStationSource<'a> {
    #[default]
    None,
    /// Comma separated text parsed during the pass.
    Text(&'a str),
    /// Stations collected beforehand by the caller.
    Accumulated(&'a CustomStations),
}

/// Everything produced by a computation pass.
#[derive(Debug)]
pub struct CutSheetReport {
    pub grade: Grade,
    /// Rows at the regular interval stations.
    pub regular: Vec<Row>,
    /// Rows at the custom stations; empty when none were given or the list
    /// was dropped.
    pub custom: Vec<Row>,
    pub merged: CutSheet,
    /// Why the regular table is empty, if it could not be generated.
    pub regular_error: Option<CutSheetError>,
    /// Problems found in the custom station text.
    pub custom_error: Option<CutSheetError>,
}

impl CutSheetReport {
    pub fn slope(&self) -> Slope {
        self.grade.slope
    }

    /// Non-fatal problems in the order they were found.
    pub fn errors(&self) -> impl Iterator<Item = &CutSheetError> {
        self.regular_error.iter().chain(self.custom_error.iter())
    }
}

fn resolve_custom(
    source: CustomStationSource<'_>,
    policy: MalformedPolicy,
) -> (StationSet, Option<CutSheetError>) {
    match source {
        CustomStationSource::None => (StationSet::new(), None),
        CustomStationSource::Accumulated(acc) => (acc.to_station_set(), None),
        CustomStationSource::Text(raw) => {
            let (set, err) = parse_custom_stations_lenient(raw);
            match (policy, err) {
                (MalformedPolicy::Omit, Some(err)) => (StationSet::new(), Some(err)),
                (_, err) => (set, err),
            }
        }
    }
}

/// Runs a computation pass.
///
/// Fails only when no table can be produced at all: non-finite parameters or
/// coinciding begin and end stations.
pub fn compute(
    params: &CutSheetParams,
    custom: CustomStationSource<'_>,
    options: &CutSheetOptions,
) -> Result<CutSheetReport> {
    params.validate()?;
    let grade = Grade::new(params.begin(), params.end())?;
    log::debug!("{}", grade.slope);

    let (regular, regular_error) =
        match regular_stations(params.begin_station, params.end_station, params.increment) {
            Ok(stations) => (grade.rows(&stations, options.include_formula), None),
            Err(err) => {
                log::warn!("regular stations not generated: {err}");
                (Vec::new(), Some(err))
            }
        };

    let (custom_stations, custom_error) = resolve_custom(custom, options.malformed_policy);
    if let Some(err) = &custom_error {
        log::warn!("{err}");
    }
    let custom = grade.rows(&custom_stations, options.include_formula);

    let merged = CutSheet::merge(&regular, &custom);
    Ok(CutSheetReport {
        grade,
        regular,
        custom,
        merged,
        regular_error,
        custom_error,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(increment: f64) -> CutSheetParams {
        CutSheetParams {
            begin_station: 0.0,
            begin_elevation: 100.0,
            end_station: 100.0,
            end_elevation: 110.0,
            increment,
        }
    }

    #[test]
    fn regular_only() {
        let report = compute(&params(20.0), CustomStationSource::None, &CutSheetOptions::default())
            .unwrap();
        assert_eq!(report.regular.len(), 7);
        assert!(report.custom.is_empty());
        assert_eq!(report.merged.len(), 7);
        assert_eq!(report.errors().count(), 0);
    }

    #[test]
    fn omit_policy_drops_custom_table() {
        let options = CutSheetOptions {
            malformed_policy: MalformedPolicy::Omit,
            ..CutSheetOptions::default()
        };
        let report = compute(&params(20.0), CustomStationSource::Text("25,abc,45"), &options)
            .unwrap();
        assert!(report.custom.is_empty());
        assert_eq!(report.merged.len(), 7);
        assert!(report.custom_error.is_some());
    }

    #[test]
    fn skip_policy_keeps_valid_tokens() {
        let report = compute(
            &params(20.0),
            CustomStationSource::Text("25,abc,45"),
            &CutSheetOptions::default(),
        )
        .unwrap();
        assert_eq!(report.custom.len(), 2);
        assert_eq!(report.merged.len(), 9);
    }

    #[test]
    fn bad_increment_still_evaluates_custom() {
        let report = compute(
            &params(0.0),
            CustomStationSource::Text("25"),
            &CutSheetOptions::default(),
        )
        .unwrap();
        assert!(report.regular.is_empty());
        assert!(matches!(
            report.regular_error,
            Some(CutSheetError::InvalidIncrement { .. })
        ));
        assert_eq!(report.merged.len(), 1);
    }

    #[test]
    fn accumulated_source() {
        let mut acc = CustomStations::new();
        acc.add(55.0).unwrap();
        acc.add(60.0).unwrap();
        let report = compute(
            &params(20.0),
            CustomStationSource::Accumulated(&acc),
            &CutSheetOptions::default(),
        )
        .unwrap();
        assert_eq!(report.custom.len(), 2);
        // 60 is also a regular station and evaluates to the identical row.
        assert_eq!(report.merged.len(), 8);
    }

    #[test]
    fn non_finite_params_are_fatal() {
        let p = CutSheetParams {
            begin_station: f64::INFINITY,
            ..params(20.0)
        };
        assert!(compute(&p, CustomStationSource::None, &CutSheetOptions::default()).is_err());
    }
}
