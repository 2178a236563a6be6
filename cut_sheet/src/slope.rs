//! Begin/end station points and the constant grade between them.

use std::fmt;

use crate::error::{CutSheetError, Result};

/// Station with its associated elevation.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StationPoint {
    pub station: f64,
    pub elevation: f64,
}

impl StationPoint {
    pub fn new(station: f64, elevation: f64) -> Self {
        Self { station, elevation }
    }
}

/// Rise over run between two station points.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Slope(f64);

impl Slope {
    /// Derives the slope between `begin` and `end`.
    ///
    /// The division is exact floating-point with no rounding applied. Equal
    /// stations are rejected since the line would be vertical, as are runs so
    /// short that the slope overflows.
    pub fn between(begin: StationPoint, end: StationPoint) -> Result<Self> {
        let run = end.station - begin.station;
        let slope = (end.elevation - begin.elevation) / run;
        if end.station == begin.station || !slope.is_finite() {
            return Err(CutSheetError::DegenerateInput {
                station: begin.station,
            });
        }
        Ok(Self(slope))
    }

    /// Rise per unit station.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Slope expressed as a percentage grade.
    pub fn percent(self) -> f64 {
        self.0 * 100.0
    }
}

impl fmt::Display for Slope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Slope = {:.3} ft/station ({:.3}%)",
            self.value(),
            self.percent()
        )
    }
}
