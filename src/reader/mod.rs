//! Record loaders
//!
//! CSV parsing of the member and claims tables into typed record vectors.
//! Loading is synchronous and fail-fast: a missing file or a malformed row
//! aborts the run before any aggregation starts.

pub mod claims;
pub mod members;

pub use claims::load_claims;
pub use members::load_members;

use std::path::Path;

use crate::error::{Result, StudyError};

/// Open a CSV reader over an input file, validating the path first
pub(crate) fn open_csv(path: &Path) -> Result<csv::Reader<std::fs::File>> {
    if !path.exists() || !path.is_file() {
        return Err(StudyError::MissingInput(path.to_path_buf()));
    }
    Ok(csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)?)
}
