//! Encoding strategies: variant-specific load, pre-shape and persist hooks.
//!
//! Each supported encoding implements [`FileStrategy`]; the shared
//! cleaning transform in [`crate::clean`] is deliberately not part of the
//! trait, so no variant can override it.

use std::fs;
use std::path::{Path, PathBuf};

use crate::clean::CleanedTable;
use crate::error::{LifexpError, Result};
use crate::input::{DataTable, EncodingKind};
use crate::region::Region;

mod json;
mod tsv;

pub use json::RecordJsonStrategy;
pub use tsv::WideTsvStrategy;

/// The hooks an encoding must provide around the shared cleaning
/// transform.
pub trait FileStrategy {
    /// Load a source artifact into a raw table.
    fn load(&self, path: &Path) -> Result<DataTable>;

    /// Bring the raw table into the common intermediate shape:
    /// `unit, sex, age, region` plus one column per year.
    fn pre_shape(&self, table: DataTable) -> Result<DataTable>;

    /// Write a cleaned table to this encoding's native output format.
    /// Returns the path written.
    fn persist(&self, table: &CleanedTable, region: Region, data_dir: &Path) -> Result<PathBuf>;
}

/// Select the strategy for a detected encoding.
pub fn strategy_for(kind: EncodingKind) -> Box<dyn FileStrategy> {
    match kind {
        EncodingKind::WideTsv => Box::new(WideTsvStrategy),
        EncodingKind::RecordJson => Box::new(RecordJsonStrategy),
    }
}

/// Output naming convention: `<region-lowercased>_life_expectancy.<ext>`.
pub(crate) fn output_path(data_dir: &Path, region: Region, extension: &str) -> Result<PathBuf> {
    fs::create_dir_all(data_dir).map_err(|e| LifexpError::Io {
        path: data_dir.to_path_buf(),
        source: e,
    })?;
    Ok(data_dir.join(format!(
        "{}_life_expectancy.{}",
        region.code().to_ascii_lowercase(),
        extension
    )))
}
