//! File input and output helpers for cut sheet data.

use std::fs::File;
use std::io::{self, Read, Write};

pub mod export;
pub use export::{
    cut_sheet_csv, read_cut_sheet_csv, write_csv, write_cut_sheet_csv, EXPORT_FILE_NAME,
    EXPORT_MIME,
};

/// Reads a file to string.
pub fn read_to_string(path: &str) -> io::Result<String> {
    let mut buffer = String::new();
    File::open(path)?.read_to_string(&mut buffer)?;
    Ok(buffer)
}

/// Writes a string to a file, replacing any existing contents.
pub fn write_string(path: &str, contents: &str) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(contents.as_bytes())
}
