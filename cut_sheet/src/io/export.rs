//! Comma separated export of a finished cut sheet.

use std::fs::File;
use std::io;

use serde::Deserialize;

use crate::error::Result;
use crate::table::{CutSheet, Row};

/// Suggested file name for a downloaded cut sheet.
pub const EXPORT_FILE_NAME: &str = "slope_cut_sheet.csv";
/// Media type of the exported text.
pub const EXPORT_MIME: &str = "text/csv";

const STATION_HEADER: &str = "Station";
const ELEVATION_HEADER: &str = "Elevation (ft)";
const FORMULA_HEADER: &str = "Formula";

/// Writes `sheet` as CSV to `writer`.
///
/// Stations are rendered with two decimals and elevations with three. The
/// formula column is present only when `include_formula` is set. Every record,
/// the header included, ends with a single `\n`.
pub fn write_csv<W: io::Write>(
    writer: W,
    sheet: &CutSheet,
    include_formula: bool,
) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);
    if include_formula {
        wtr.write_record([STATION_HEADER, ELEVATION_HEADER, FORMULA_HEADER])?;
    } else {
        wtr.write_record([STATION_HEADER, ELEVATION_HEADER])?;
    }
    for row in sheet {
        let station = format!("{:.2}", row.station);
        let elevation = format!("{:.3}", row.elevation);
        if include_formula {
            let formula = row.formula.as_deref().unwrap_or("");
            wtr.write_record([station.as_str(), elevation.as_str(), formula])?;
        } else {
            wtr.write_record([station.as_str(), elevation.as_str()])?;
        }
    }
    wtr.flush()
}

/// Renders `sheet` as a CSV string.
///
/// # Panics
///
/// Never in practice: the writer targets memory and every field is a `&str`,
/// so neither the write nor the UTF-8 conversion can fail.
pub fn cut_sheet_csv(sheet: &CutSheet, include_formula: bool) -> String {
    let mut buf = Vec::new();
    write_csv(&mut buf, sheet, include_formula)
        .and_then(|()| String::from_utf8(buf).map_err(io::Error::other))
        .expect("CSV rendered in memory from UTF-8 fields")
}

/// Writes `sheet` as CSV to the file at `path`.
pub fn write_cut_sheet_csv(path: &str, sheet: &CutSheet, include_formula: bool) -> io::Result<()> {
    let file = File::create(path)?;
    write_csv(file, sheet, include_formula)?;
    log::info!("wrote {} rows to {path}", sheet.len());
    Ok(())
}

#[derive(Deserialize)]
struct ExportedRow {
    #[serde(rename = "Station")]
    station: f64,
    #[serde(rename = "Elevation (ft)")]
    elevation: f64,
    #[serde(rename = "Formula", default)]
    formula: Option<String>,
}

/// Reads rows back from previously exported CSV text.
pub fn read_cut_sheet_csv(text: &str) -> Result<Vec<Row>> {
    let mut rdr = csv::Reader::from_reader(text.as_bytes());
    let mut rows = Vec::new();
    for record in rdr.deserialize::<ExportedRow>() {
        let rec = record?;
        rows.push(Row {
            station: rec.station,
            elevation: rec.elevation,
            formula: rec.formula,
        });
    }
    Ok(rows)
}
