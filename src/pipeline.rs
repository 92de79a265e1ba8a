//! Study pipeline orchestration
//!
//! Loads the two record sets, runs the combination and cost aggregation
//! engine and the distribution summarizer, and writes the report files.

use log::info;

use crate::algorithm::statistics::StudyStatistics;
use crate::algorithm::{aggregate_costs, merge_report, summarize, tally_occurrences};
use crate::config::StudyConfig;
use crate::error::Result;
use crate::report::write_reports;

/// Run the full study pipeline
///
/// Inputs are validated before any computation; a missing file fails the
/// run without producing partial output.
pub fn run(config: &StudyConfig) -> Result<StudyStatistics> {
    config.validate()?;

    let members = crate::reader::load_members(&config.member_path())?;
    let claims = crate::reader::load_claims(&config.claims_path())?;

    info!("Generating chronic condition combinations");
    let occurrences = tally_occurrences(&members);

    info!("Aggregating payment data by chronic condition set");
    let costs = aggregate_costs(&members);

    let combinations = merge_report(&costs, &occurrences);

    info!("Summarizing demographic distributions");
    let distribution = summarize(&members, config.reference_year);

    let statistics = StudyStatistics::calculate(&members, claims.len(), &costs, &occurrences);
    write_reports(&config.output_dir, &combinations, &distribution, &statistics)?;

    Ok(statistics)
}
