//! Encoding detection from a path or an in-memory table.

use std::path::PathBuf;

use crate::error::{LifexpError, Result};

use super::table::DataTable;

/// Header of the composite dimension column in the wide TSV encoding.
/// The backslash is literal; Eurostat names the column `unit,sex,age,geo\time`.
pub const COMPOSITE_KEY: &str = "unit,sex,age,geo\\time";

/// Columns that identify the record-oriented encoding structurally.
const RECORD_SIGNATURE: &[&str] = &["age", "country", "sex", "unit"];

/// The supported source encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodingKind {
    /// Tab-separated, one composite key column plus one column per year.
    WideTsv,
    /// JSON array of records with separate dimension fields.
    RecordJson,
}

/// A source artifact: either a file to be read, or a table a caller has
/// already materialized (e.g. a sampled fixture).
#[derive(Debug, Clone)]
pub enum Source {
    Path(PathBuf),
    Table(DataTable),
}

impl Source {
    pub fn path(path: impl Into<PathBuf>) -> Self {
        Source::Path(path.into())
    }
}

impl From<DataTable> for Source {
    fn from(table: DataTable) -> Self {
        Source::Table(table)
    }
}

/// Classify a source into one of the supported encodings.
///
/// Paths are classified by extension, in-memory tables by structure.
/// Classification failure is fatal; there is no fallback encoding.
pub fn detect(source: &Source) -> Result<EncodingKind> {
    match source {
        Source::Path(path) => {
            let extension = path
                .extension()
                .and_then(|e| e.to_str())
                .unwrap_or_default();
            match extension {
                "tsv" => Ok(EncodingKind::WideTsv),
                "json" => Ok(EncodingKind::RecordJson),
                _ => Err(LifexpError::UnsupportedFormat(format!(
                    "no strategy for '{}'",
                    path.display()
                ))),
            }
        }
        Source::Table(table) => {
            if table.has_column(COMPOSITE_KEY) {
                Ok(EncodingKind::WideTsv)
            } else if RECORD_SIGNATURE.iter().all(|c| table.has_column(c)) {
                Ok(EncodingKind::RecordJson)
            } else {
                Err(LifexpError::UnsupportedFormat(
                    "table matches no known column signature".to_string(),
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_by_extension() {
        let tsv = Source::path("data/eu_life_expectancy_raw.tsv");
        let json = Source::path("data/eurostat_life_expect.json");
        assert_eq!(detect(&tsv).unwrap(), EncodingKind::WideTsv);
        assert_eq!(detect(&json).unwrap(), EncodingKind::RecordJson);
    }

    #[test]
    fn test_detect_unknown_extension() {
        let err = detect(&Source::path("data/notes.txt")).unwrap_err();
        assert!(matches!(err, LifexpError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_detect_wide_table_structurally() {
        let table = DataTable::new(
            vec![COMPOSITE_KEY.to_string(), "2020".to_string()],
            vec![vec!["YR,F,Y1,PT".to_string(), "84.1".to_string()]],
        );
        assert_eq!(detect(&table.into()).unwrap(), EncodingKind::WideTsv);
    }

    #[test]
    fn test_detect_record_table_structurally() {
        let headers = ["unit", "sex", "age", "country", "2020"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let table = DataTable::new(headers, vec![]);
        assert_eq!(detect(&table.into()).unwrap(), EncodingKind::RecordJson);
    }

    #[test]
    fn test_detect_unrecognized_table() {
        let table = DataTable::new(
            vec!["foo".to_string(), "bar".to_string()],
            vec![],
        );
        let err = detect(&table.into()).unwrap_err();
        assert!(matches!(err, LifexpError::UnsupportedFormat(_)));
    }
}
