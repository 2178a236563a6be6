//! Linear grade evaluation between the begin and end station points.

use crate::error::Result;
use crate::slope::{Slope, StationPoint};
use crate::stationing::StationSet;
use crate::table::Row;

/// Decimal places kept on evaluated elevations.
pub const ELEVATION_DECIMALS: i32 = 3;

/// Straight grade through a begin station point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grade {
    pub begin: StationPoint,
    pub end: StationPoint,
    pub slope: Slope,
}

impl Grade {
    /// Creates the grade from `begin` to `end`, failing when the stations
    /// coincide.
    pub fn new(begin: StationPoint, end: StationPoint) -> Result<Self> {
        let slope = Slope::between(begin, end)?;
        Ok(Self { begin, end, slope })
    }

    /// Unrounded elevation at `station`, extrapolating past either end.
    pub fn elevation_at(&self, station: f64) -> f64 {
        self.begin.elevation + self.slope.value() * (station - self.begin.station)
    }

    /// Elevation at `station` rounded for presentation.
    pub fn rounded_elevation_at(&self, station: f64) -> f64 {
        round_to(self.elevation_at(station), ELEVATION_DECIMALS)
    }

    /// Human readable form of the elevation expression at `station`.
    pub fn formula_at(&self, station: f64) -> String {
        format!(
            "{:.2} + {:.3} × ({:.2} - {:.2})",
            self.begin.elevation,
            self.slope.value(),
            station,
            self.begin.station
        )
    }

    pub fn row_at(&self, station: f64, include_formula: bool) -> Row {
        Row {
            station,
            elevation: self.rounded_elevation_at(station),
            formula: include_formula.then(|| self.formula_at(station)),
        }
    }

    /// Evaluates one row per station in `stations`.
    pub fn rows(&self, stations: &StationSet, include_formula: bool) -> Vec<Row> {
        stations
            .iter()
            .map(|s| self.row_at(s, include_formula))
            .collect()
    }
}

/// Rounds half to even at `decimals` places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round_ties_even() / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Grade {
        Grade::new(StationPoint::new(0.0, 100.0), StationPoint::new(100.0, 110.0)).unwrap()
    }

    #[test]
    fn interpolates_and_extrapolates() {
        let g = sample();
        assert!((g.elevation_at(25.0) - 102.5).abs() < 1e-9);
        assert!((g.elevation_at(120.0) - 112.0).abs() < 1e-9);
        assert!((g.elevation_at(-10.0) - 99.0).abs() < 1e-9);
    }

    #[test]
    fn rounds_to_three_places() {
        let g = Grade::new(StationPoint::new(0.0, 0.0), StationPoint::new(3.0, 1.0)).unwrap();
        assert_eq!(g.rounded_elevation_at(1.0), 0.333);
        assert_eq!(g.rounded_elevation_at(2.0), 0.667);
    }

    #[test]
    fn rounding_is_repeatable() {
        let g = Grade::new(StationPoint::new(12.5, 98.765), StationPoint::new(87.3, 101.2)).unwrap();
        let first = g.rounded_elevation_at(43.21);
        assert_eq!(first, g.rounded_elevation_at(43.21));
        assert_eq!(first, round_to(first, ELEVATION_DECIMALS));
    }

    #[test]
    fn formula_text() {
        let g = sample();
        assert_eq!(g.formula_at(25.0), "100.00 + 0.100 × (25.00 - 0.00)");
    }

    #[test]
    fn rows_without_formula() {
        let g = sample();
        let rows = g.rows(&StationSet::from_values([85.0, 25.0]), false);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].station, 25.0);
        assert_eq!(rows[0].elevation, 102.5);
        assert!(rows[1].formula.is_none());
    }
}
