//! Strategy for the wide tab-separated encoding.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::clean::{CleanedTable, ID_COLUMNS};
use crate::error::{LifexpError, Result};
use crate::input::{COMPOSITE_KEY, DataTable};
use crate::region::Region;

use super::{FileStrategy, output_path};

/// Wide TSV: one composite key column, one column per year. The cleaned
/// output is written back as comma-separated text.
pub struct WideTsvStrategy;

impl FileStrategy for WideTsvStrategy {
    fn load(&self, path: &Path) -> Result<DataTable> {
        let file = File::open(path).map_err(|e| LifexpError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(true)
            .flexible(true)
            .from_reader(BufReader::new(file));

        let headers: Vec<String> = reader.headers()?.iter().map(|s| s.to_string()).collect();
        if headers.is_empty() {
            return Err(LifexpError::EmptyData(format!(
                "no columns in '{}'",
                path.display()
            )));
        }

        let expected = headers.len();
        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result?;
            let mut row: Vec<String> = record.iter().map(|s| s.to_string()).collect();
            // Ragged lines are padded or truncated to the header width.
            row.resize(expected, String::new());
            rows.push(row);
        }

        Ok(DataTable::new(headers, rows))
    }

    fn pre_shape(&self, table: DataTable) -> Result<DataTable> {
        table.split_column(COMPOSITE_KEY, ',', &ID_COLUMNS)
    }

    fn persist(&self, table: &CleanedTable, region: Region, data_dir: &Path) -> Result<PathBuf> {
        let path = output_path(data_dir, region, "csv")?;

        let mut writer = csv::Writer::from_path(&path)?;
        for record in &table.records {
            writer.serialize(record)?;
        }
        writer.flush().map_err(|e| LifexpError::Io {
            path: path.clone(),
            source: e,
        })?;

        Ok(path)
    }
}
