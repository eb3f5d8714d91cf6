//! lifexp: cleaning pipeline for the Eurostat life-expectancy dataset.
//!
//! The dataset ships in two encodings: a wide tab-separated file keyed by
//! a composite `unit,sex,age,geo\time` column, and a record-oriented JSON
//! file with separate dimension fields. This crate detects the encoding,
//! brings both into one intermediate shape, applies a shared
//! reshape/normalize/filter transform, and persists the result mirroring
//! the input encoding.
//!
//! # Example
//!
//! ```no_run
//! use lifexp::{Pipeline, Region, Source};
//!
//! let pipeline = Pipeline::new("data");
//! let cleaned = pipeline
//!     .run(Source::path("eu_life_expectancy_raw.tsv"), Region::Pt)
//!     .unwrap();
//!
//! println!("{} rows for PT", cleaned.len());
//! ```

pub mod clean;
pub mod error;
pub mod input;
pub mod region;
pub mod strategy;

mod pipeline;

pub use clean::{CleanedRecord, CleanedTable, clean, normalize_value};
pub use error::{LifexpError, Result};
pub use input::{COMPOSITE_KEY, DataTable, EncodingKind, Source, detect};
pub use pipeline::Pipeline;
pub use region::Region;
pub use strategy::{FileStrategy, RecordJsonStrategy, WideTsvStrategy, strategy_for};
