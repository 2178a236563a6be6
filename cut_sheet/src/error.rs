//! Error taxonomy shared by the cut sheet components.

use thiserror::Error;

/// Errors reported by the slope, stationing, parsing and export steps.
#[derive(Debug, Error)]
pub enum CutSheetError {
    /// Begin and end station coincide so no slope can be derived.
    #[error("begin and end station cannot be the same (station {station})")]
    DegenerateInput { station: f64 },

    #[error("station interval must be a positive number, got {increment}")]
    InvalidIncrement { increment: f64 },

    #[error("station interval would produce {count} stations (limit {limit})")]
    StationLimitExceeded { count: u64, limit: u64 },

    /// One or more custom station tokens could not be read as numbers.
    #[error(
        "invalid input in custom station list: {}; use numbers separated by commas",
        quoted(.tokens)
    )]
    MalformedStationList { tokens: Vec<String> },

    #[error("{field} must be a finite number")]
    NonFiniteInput { field: &'static str },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl CutSheetError {
    /// Returns true when the error prevents any table from being produced.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            CutSheetError::DegenerateInput { .. } | CutSheetError::NonFiniteInput { .. }
        )
    }
}

fn quoted(tokens: &[String]) -> String {
    tokens
        .iter()
        .map(|t| format!("\"{t}\""))
        .collect::<Vec<_>>()
        .join(", ")
}

pub type Result<T> = std::result::Result<T, CutSheetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_message_names_tokens() {
        let err = CutSheetError::MalformedStationList {
            tokens: vec!["abc".to_string(), "".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains("\"abc\""));
        assert!(msg.contains("\"\""));
        assert!(!err.is_fatal());
    }

    #[test]
    fn degenerate_is_fatal() {
        assert!(CutSheetError::DegenerateInput { station: 0.0 }.is_fatal());
        assert!(!CutSheetError::InvalidIncrement { increment: 0.0 }.is_fatal());
    }
}
