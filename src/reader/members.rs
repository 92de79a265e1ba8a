//! Member table loader.

use std::path::Path;
use std::time::Instant;

use crate::error::Result;
use crate::models::{Member, MemberRow};
use crate::reader::open_csv;
use crate::utils::logging::{log_operation_complete, log_operation_start};

/// Load and enrich the member table
///
/// Every row is deserialized into a [`MemberRow`] and converted into the
/// enriched [`Member`] record in one pass.
pub fn load_members(path: &Path) -> Result<Vec<Member>> {
    log_operation_start("Loading member records from", path);
    let start = Instant::now();

    let mut reader = open_csv(path)?;
    let mut members = Vec::new();
    for result in reader.deserialize() {
        let row: MemberRow = result?;
        members.push(Member::from(row));
    }

    log_operation_complete("loaded", path, members.len(), Some(start.elapsed()));
    Ok(members)
}
