//! Grid data ingestion library.
//!
//! Reads gridded scalar data from disk or any buffered reader into a
//! [`grid_common::Grid`]. The only on-disk format is the ESRI ASCII grid:
//!
//! - a short `key value` header (`ncols`, `nrows`, `xllcorner`, ...)
//!   terminated by `NODATA_value`
//! - one payload line per grid row
//!
//! Loaders implement [`GridDataset`] so callers can stay format agnostic.

pub mod ascii;
pub mod error;
pub mod metadata;

// Re-exports
pub use ascii::{AsciiGridDataset, GridDataset, GridHeader};
pub use error::{IngestError, Result};
pub use metadata::{detect_file_type, FileType};
