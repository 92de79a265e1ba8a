//! Claims table loader.

use std::path::Path;
use std::time::Instant;

use crate::error::Result;
use crate::models::{ClaimRow, OutpatientClaim};
use crate::reader::open_csv;
use crate::utils::logging::{log_operation_complete, log_operation_start};

/// Load the outpatient claims table
///
/// The claims file is large; it is read in a single synchronous pass into
/// typed records. The engine itself never touches claim lines, so the
/// loaded set only serves the input contract.
pub fn load_claims(path: &Path) -> Result<Vec<OutpatientClaim>> {
    log_operation_start("Loading claim records from", path);
    let start = Instant::now();

    let mut reader = open_csv(path)?;
    let mut claims = Vec::new();
    for result in reader.deserialize() {
        let row: ClaimRow = result?;
        claims.push(OutpatientClaim::from(row));
    }

    log_operation_complete("loaded", path, claims.len(), Some(start.elapsed()));
    Ok(claims)
}
