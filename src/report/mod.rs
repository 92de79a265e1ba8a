//! Report writers
//!
//! Serializes the combination report and the stacked distribution table as
//! flat CSV files, plus a JSON run summary. Column names are a contract
//! with the downstream dashboard; renaming any of them is a breaking
//! change.

use std::fs;
use std::path::Path;

use log::info;

use crate::algorithm::distribution::DistributionRow;
use crate::algorithm::merge::CombinationRow;
use crate::algorithm::statistics::StudyStatistics;
use crate::error::Result;
use crate::models::ALL_CONDITIONS;

/// File name of the combination report
pub const COMBINATION_REPORT_FILE: &str = "condition_combination_analysis.csv";
/// File name of the distribution report
pub const DISTRIBUTION_REPORT_FILE: &str = "summary_distribution_analysis.csv";
/// File name of the JSON run summary
pub const RUN_SUMMARY_FILE: &str = "summary.json";

/// Write all run artifacts into the output directory
pub fn write_reports(
    output_dir: &Path,
    combinations: &[CombinationRow],
    distribution: &[DistributionRow],
    statistics: &StudyStatistics,
) -> Result<()> {
    fs::create_dir_all(output_dir)?;

    write_combination_report(&output_dir.join(COMBINATION_REPORT_FILE), combinations)?;
    write_distribution_report(&output_dir.join(DISTRIBUTION_REPORT_FILE), distribution)?;
    write_run_summary(&output_dir.join(RUN_SUMMARY_FILE), statistics)?;

    Ok(())
}

/// Write the merged combination report
pub fn write_combination_report(path: &Path, rows: &[CombinationRow]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record([
        "active_conditions_str",
        "member_count",
        "ip_medicare",
        "ip_beneficiary",
        "ip_pp",
        "op_medicare",
        "op_beneficiary",
        "op_pp",
        "carrier_medicare",
        "carrier_beneficiary",
        "carrier_pp",
        "number_of_conditions",
        "total_occurrence",
        "chronic_condition_count",
        "total_ip_cost",
        "total_op_cost",
        "total_carrier_cost",
        "total_medicare_cost",
        "total_beneficiary_cost",
        "total_pp_cost",
        "total_cost",
    ])?;

    for row in rows {
        let payments = &row.payments;
        writer.write_record([
            row.label.clone(),
            row.member_count.to_string(),
            payments.ip_medicare.to_string(),
            payments.ip_beneficiary.to_string(),
            payments.ip_pp.to_string(),
            payments.op_medicare.to_string(),
            payments.op_beneficiary.to_string(),
            payments.op_pp.to_string(),
            payments.carrier_medicare.to_string(),
            payments.carrier_beneficiary.to_string(),
            payments.carrier_pp.to_string(),
            optional_field(row.number_of_conditions),
            optional_field(row.total_occurrence),
            row.chronic_condition_count.label().to_string(),
            payments.total_ip_cost().to_string(),
            payments.total_op_cost().to_string(),
            payments.total_carrier_cost().to_string(),
            payments.total_medicare_cost().to_string(),
            payments.total_beneficiary_cost().to_string(),
            payments.total_pp_cost().to_string(),
            payments.total_cost().to_string(),
        ])?;
    }

    writer.flush()?;
    info!("Exported combination report to {}", path.display());
    Ok(())
}

/// Write the stacked distribution report
pub fn write_distribution_report(path: &Path, rows: &[DistributionRow]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    let mut header = vec![
        "Group Column".to_string(),
        "Cohort".to_string(),
        "% of Total Population".to_string(),
    ];
    header.extend(
        ALL_CONDITIONS
            .iter()
            .map(|condition| format!("% of {} Population", condition.code())),
    );
    writer.write_record(&header)?;

    for row in rows {
        let mut record = vec![
            row.attribute.name().to_string(),
            row.cohort.to_string(),
            row.population_share.to_string(),
        ];
        record.extend(row.condition_shares.iter().map(ToString::to_string));
        writer.write_record(&record)?;
    }

    writer.flush()?;
    info!("Exported distribution report to {}", path.display());
    Ok(())
}

/// Write the JSON run summary
pub fn write_run_summary(path: &Path, statistics: &StudyStatistics) -> Result<()> {
    let file = fs::File::create(path)?;
    serde_json::to_writer_pretty(file, statistics)?;
    info!("Exported run summary to {}", path.display());
    Ok(())
}

/// Render an optional numeric column, empty when unmatched
fn optional_field<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
