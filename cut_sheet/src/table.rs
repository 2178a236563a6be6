//! Cut sheet rows and the merge of regular and custom tables.

use std::collections::HashSet;

/// One station of a cut sheet.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Row {
    pub station: f64,
    pub elevation: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formula: Option<String>,
}

impl Row {
    /// Identity used for duplicate removal. Exact comparison on every field;
    /// `-0.0` and `0.0` compare equal as they do with `==`.
    fn key(&self) -> (u64, u64, Option<&str>) {
        (
            (self.station + 0.0).to_bits(),
            (self.elevation + 0.0).to_bits(),
            self.formula.as_deref(),
        )
    }
}

/// Rows sorted ascending by station with exact duplicates removed.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
#[serde(transparent)]
pub struct CutSheet {
    rows: Vec<Row>,
}

impl CutSheet {
    /// Merges `regular` and `custom` rows into one sheet.
    ///
    /// Rows identical in station, elevation and formula are kept once. Rows
    /// sharing a station but differing in another field are all retained. The
    /// sort is stable, so among equal stations regular rows come first.
    pub fn merge(regular: &[Row], custom: &[Row]) -> Self {
        let mut seen = HashSet::new();
        let mut rows: Vec<Row> = Vec::with_capacity(regular.len() + custom.len());
        for row in regular.iter().chain(custom) {
            if seen.insert(row.key()) {
                rows.push(row.clone());
            }
        }
        rows.sort_by(|a, b| a.station.total_cmp(&b.station));
        log::debug!(
            "merged {} regular and {} custom rows into {}",
            regular.len(),
            custom.len(),
            rows.len()
        );
        Self { rows }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Row at position `index`, counted from zero.
    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_formulas(&self) -> bool {
        self.rows.iter().any(|r| r.formula.is_some())
    }

    pub fn stations(&self) -> impl Iterator<Item = f64> + '_ {
        self.rows.iter().map(|r| r.station)
    }
}

impl<'a> IntoIterator for &'a CutSheet {
    type Item = &'a Row;
    type IntoIter = std::slice::Iter<'a, Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
