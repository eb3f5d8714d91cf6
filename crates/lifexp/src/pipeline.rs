//! Pipeline orchestration: detect, load, pre-shape, clean, persist.

use std::path::{Path, PathBuf};

use crate::clean::{CleanedTable, clean};
use crate::error::Result;
use crate::input::{Source, detect};
use crate::region::Region;
use crate::strategy::strategy_for;

/// The end-to-end cleaning pipeline.
///
/// Wires the format detector, the encoding strategy and the shared
/// cleaning transform together. Each invocation owns its tables; failures
/// at any stage propagate unchanged and nothing is written until the full
/// transform has succeeded.
pub struct Pipeline {
    data_dir: PathBuf,
}

impl Pipeline {
    /// The fallback region when a caller does not name one.
    pub const DEFAULT_REGION: Region = Region::Pt;

    /// Create a pipeline rooted at a data directory. Relative source
    /// paths resolve against it and output artifacts land in it.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// The directory this pipeline reads from and writes to.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Run the full pipeline for one source and one target region.
    ///
    /// The region is validated before any file is opened. The cleaned
    /// table is both persisted next to the source data and returned.
    pub fn run(&self, source: Source, region: Region) -> Result<CleanedTable> {
        region.validate()?;

        let kind = detect(&source)?;
        let strategy = strategy_for(kind);

        let raw = match source {
            Source::Path(path) => strategy.load(&self.resolve(&path))?,
            Source::Table(table) => table,
        };
        let shaped = strategy.pre_shape(raw)?;
        let cleaned = clean(shaped, region)?;
        strategy.persist(&cleaned, region, &self.data_dir)?;

        Ok(cleaned)
    }

    /// Run with the default region.
    pub fn run_default(&self, source: Source) -> Result<CleanedTable> {
        self.run(source, Self::DEFAULT_REGION)
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.data_dir.join(path)
        }
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new("data")
    }
}
