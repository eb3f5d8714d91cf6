//! In-memory tabular data.

use crate::error::{LifexpError, Result};

/// Raw tabular data as loaded from a source artifact.
///
/// Cells are kept as strings until the shared cleaning transform coerces
/// them; both encodings funnel into this one shape.
#[derive(Debug, Clone, PartialEq)]
pub struct DataTable {
    /// Column headers.
    pub headers: Vec<String>,
    /// Row data as strings (row-major order).
    pub rows: Vec<Vec<String>>,
}

impl DataTable {
    /// Create a new data table.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Get the number of rows (excluding header).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Position of a column by name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Whether a column with this exact name exists.
    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Get a specific cell value.
    pub fn get(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row).and_then(|r| r.get(col).map(|s| s.as_str()))
    }

    /// Rename a column in place.
    pub fn rename_column(&mut self, old: &str, new: &str) -> Result<()> {
        let index = self.column_index(old).ok_or_else(|| LifexpError::Parse {
            column: old.to_string(),
            message: "column not found".to_string(),
        })?;
        self.headers[index] = new.to_string();
        Ok(())
    }

    /// Split a delimited column into several new columns.
    ///
    /// The new columns are placed at the front of the table; the source
    /// column is dropped and the remaining columns keep their order.
    /// Every cell must split into exactly `into.len()` parts.
    pub fn split_column(self, name: &str, delimiter: char, into: &[&str]) -> Result<DataTable> {
        let index = self.column_index(name).ok_or_else(|| LifexpError::Parse {
            column: name.to_string(),
            message: "column not found".to_string(),
        })?;

        let mut headers: Vec<String> = into.iter().map(|s| s.to_string()).collect();
        headers.extend(
            self.headers
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != index)
                .map(|(_, h)| h.clone()),
        );

        let mut rows = Vec::with_capacity(self.rows.len());
        for row in self.rows {
            let key = row.get(index).map(|s| s.as_str()).unwrap_or("");
            let parts: Vec<&str> = key.split(delimiter).collect();
            if parts.len() != into.len() {
                return Err(LifexpError::Parse {
                    column: name.to_string(),
                    message: format!(
                        "expected {} '{}'-separated fields, got {} in '{}'",
                        into.len(),
                        delimiter,
                        parts.len(),
                        key
                    ),
                });
            }

            let mut new_row: Vec<String> = parts.iter().map(|p| p.to_string()).collect();
            new_row.extend(
                row.into_iter()
                    .enumerate()
                    .filter(|(i, _)| *i != index)
                    .map(|(_, cell)| cell),
            );
            rows.push(new_row);
        }

        Ok(DataTable::new(headers, rows))
    }
}
