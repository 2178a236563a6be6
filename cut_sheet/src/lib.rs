//! Core library for the slope cut sheet generator.
//!
//! Given a begin and end station with elevations, the crate derives the
//! constant slope between them, evaluates elevations at regular interval and
//! custom stations, merges both into one sorted table and exports it as CSV.

pub mod custom;
pub mod error;
pub mod grade;
pub mod io;
pub mod params;
pub mod sheet;
pub mod slope;
pub mod stationing;
pub mod table;

pub use custom::{
    parse_custom_stations, parse_custom_stations_lenient, CustomStations, MalformedPolicy,
};
pub use error::{CutSheetError, Result};
pub use grade::Grade;
pub use params::{CutSheetOptions, CutSheetParams};
pub use sheet::{compute, CustomStationSource, CutSheetReport};
pub use slope::{Slope, StationPoint};
pub use stationing::{regular_stations, StationSet};
pub use table::{CutSheet, Row};
