//! Input parameters of a computation pass.

use serde::{Deserialize, Serialize};

use crate::custom::MalformedPolicy;
use crate::error::{CutSheetError, Result};
use crate::slope::StationPoint;

/// Begin and end of the grade plus the regular station interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CutSheetParams {
    pub begin_station: f64,
    pub begin_elevation: f64,
    pub end_station: f64,
    pub end_elevation: f64,
    pub increment: f64,
}

impl Default for CutSheetParams {
    fn default() -> Self {
        Self {
            begin_station: 0.0,
            begin_elevation: 100.0,
            end_station: 100.0,
            end_elevation: 110.0,
            increment: 10.0,
        }
    }
}

impl CutSheetParams {
    pub fn begin(&self) -> StationPoint {
        StationPoint::new(self.begin_station, self.begin_elevation)
    }

    pub fn end(&self) -> StationPoint {
        StationPoint::new(self.end_station, self.end_elevation)
    }

    /// Checks that the stations and elevations are finite numbers.
    ///
    /// The increment is validated separately by the station generator since
    /// a bad interval only affects the regular table.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("begin station", self.begin_station),
            ("begin elevation", self.begin_elevation),
            ("end station", self.end_station),
            ("end elevation", self.end_elevation),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(CutSheetError::NonFiniteInput { field });
            }
        }
        Ok(())
    }
}

/// Presentation and error policy switches for a computation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CutSheetOptions {
    pub include_formula: bool,
    pub malformed_policy: MalformedPolicy,
}

impl Default for CutSheetOptions {
    fn default() -> Self {
        Self {
            include_formula: true,
            malformed_policy: MalformedPolicy::SkipInvalid,
        }
    }
}

/// Reads parameters from a JSON file. Missing fields take their defaults.
pub fn read_params_json(path: &str) -> std::io::Result<CutSheetParams> {
    let contents = crate::io::read_to_string(path)?;
    let params: CutSheetParams = serde_json::from_str(&contents)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
    Ok(params)
}

pub fn write_params_json(path: &str, params: &CutSheetParams) -> std::io::Result<()> {
    let json = serde_json::to_string_pretty(params).map_err(std::io::Error::other)?;
    crate::io::write_string(path, &json)
}
