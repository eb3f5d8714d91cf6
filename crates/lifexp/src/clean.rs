//! The shared cleaning transform: melt, normalize, coerce, filter.
//!
//! Every encoding strategy funnels its pre-shaped table through [`clean`];
//! the transform itself is encoding-agnostic.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{LifexpError, Result};
use crate::input::DataTable;
use crate::region::Region;

/// The dimension columns every intermediate table must expose.
pub const ID_COLUMNS: [&str; 4] = ["unit", "sex", "age", "region"];

/// Eurostat appends lowercase footnote letters to values ("78.5 b").
/// Only `[a-z]` is stripped; digits, signs and decimal points survive.
static ANNOTATIONS: Lazy<Regex> = Lazy::new(|| Regex::new("[a-z]").unwrap());

/// One row of the long-format output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanedRecord {
    pub unit: String,
    pub sex: String,
    pub age: String,
    pub region: String,
    pub year: i32,
    pub value: f64,
}

/// The pipeline's output artifact: long-format rows for a single region.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CleanedTable {
    pub records: Vec<CleanedRecord>,
}

impl CleanedTable {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CleanedRecord> {
        self.records.iter()
    }
}

/// Strip annotation letters and parse a value cell.
///
/// Returns `None` for cells that hold no number after stripping, such as
/// the `:` placeholder Eurostat uses for unavailable data. Idempotent:
/// a value that parses once parses to the same number again.
pub fn normalize_value(raw: &str) -> Option<f64> {
    let stripped = ANNOTATIONS.replace_all(raw, "");
    stripped.trim().parse::<f64>().ok()
}

/// Clean a pre-shaped intermediate table down to one region.
///
/// The region is validated before any row is touched. The table is then
/// melted from wide to long, values are normalized and coerced, rows with
/// unparseable values are dropped, and the result is filtered to the
/// target region's exact code.
pub fn clean(table: DataTable, region: Region) -> Result<CleanedTable> {
    region.validate()?;

    let mut id_indices = [0usize; 4];
    for (slot, name) in id_indices.iter_mut().zip(ID_COLUMNS) {
        *slot = table.column_index(name).ok_or_else(|| LifexpError::Parse {
            column: name.to_string(),
            message: "missing dimension column".to_string(),
        })?;
    }

    // Every non-dimension column is a year column; labels may carry
    // padding whitespace in the raw Eurostat export.
    let mut year_columns: Vec<(usize, i32)> = Vec::new();
    for (index, header) in table.headers.iter().enumerate() {
        if id_indices.contains(&index) {
            continue;
        }
        let year = header.trim().parse::<i32>().map_err(|_| LifexpError::Parse {
            column: header.clone(),
            message: "year column label is not an integer".to_string(),
        })?;
        year_columns.push((index, year));
    }

    let [unit_idx, sex_idx, age_idx, region_idx] = id_indices;
    let mut records = Vec::new();

    for row in &table.rows {
        let cell = |i: usize| row.get(i).map(|s| s.as_str()).unwrap_or("");
        if cell(region_idx) != region.code() {
            continue;
        }

        for &(index, year) in &year_columns {
            let Some(value) = normalize_value(cell(index)) else {
                continue;
            };
            records.push(CleanedRecord {
                unit: cell(unit_idx).to_string(),
                sex: cell(sex_idx).to_string(),
                age: cell(age_idx).to_string(),
                region: region.code().to_string(),
                year,
                value,
            });
        }
    }

    Ok(CleanedTable { records })
}
