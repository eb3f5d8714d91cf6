//! Strategy for the record-oriented JSON encoding.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde_json::Value;

use crate::clean::CleanedTable;
use crate::error::{LifexpError, Result};
use crate::input::DataTable;
use crate::region::Region;

use super::{FileStrategy, output_path};

/// Record-oriented JSON: an array of objects, each carrying the dimension
/// fields (with the region under `country`) plus one field per year.
pub struct RecordJsonStrategy;

/// Flatten a JSON scalar into the string cell representation the shared
/// transform expects. Strings keep their content, numbers their decimal
/// form, null becomes the empty cell.
fn cell_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

impl FileStrategy for RecordJsonStrategy {
    fn load(&self, path: &Path) -> Result<DataTable> {
        let file = File::open(path).map_err(|e| LifexpError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        // IndexMap keeps the year fields in file order.
        let records: Vec<IndexMap<String, Value>> = serde_json::from_reader(BufReader::new(file))?;
        let Some(first) = records.first() else {
            return Err(LifexpError::EmptyData(format!(
                "no records in '{}'",
                path.display()
            )));
        };

        let headers: Vec<String> = first.keys().cloned().collect();
        let rows = records
            .iter()
            .map(|record| {
                headers
                    .iter()
                    .map(|h| record.get(h).map(cell_text).unwrap_or_default())
                    .collect()
            })
            .collect();

        Ok(DataTable::new(headers, rows))
    }

    fn pre_shape(&self, mut table: DataTable) -> Result<DataTable> {
        table.rename_column("country", "region")?;
        Ok(table)
    }

    fn persist(&self, table: &CleanedTable, region: Region, data_dir: &Path) -> Result<PathBuf> {
        let path = output_path(data_dir, region, "json")?;

        let file = File::create(&path).map_err(|e| LifexpError::Io {
            path: path.clone(),
            source: e,
        })?;
        serde_json::to_writer(BufWriter::new(file), &table.records)?;

        Ok(path)
    }
}
