//! Input representation and encoding detection.

mod detect;
mod table;

pub use detect::{COMPOSITE_KEY, EncodingKind, Source, detect};
pub use table::DataTable;
