//! Combination report assembly
//!
//! Left-joins the exact-set cost groups to the occurrence counter and
//! derives the remaining report columns. Only exact sets survive: a
//! combination that exists solely as a sub-combination of larger sets has
//! no cost group and is dropped by the join. The empty set never appears in
//! the occurrence counter, so the sentinel row carries no occurrence
//! metadata.

use log::info;

use crate::algorithm::cost::CostGroups;
use crate::algorithm::occurrence::OccurrenceCounts;
use crate::models::{ConditionSet, PaymentTotals};

/// Label used for the empty condition set in the cost table
pub const NO_CONDITIONS_LABEL: &str = "NO CHRONIC CONDITIONS";

/// Category of a combination by its condition count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConditionCountCategory {
    /// Fewer than three conditions
    FewerThanThree,
    /// Three or more conditions
    Multiple,
}

impl ConditionCountCategory {
    /// Number of conditions at which a combination counts as "Multiple"
    pub const THRESHOLD: usize = 3;

    /// Category of a combination with the given condition count
    #[must_use]
    pub const fn from_count(count: usize) -> Self {
        if count < Self::THRESHOLD {
            Self::FewerThanThree
        } else {
            Self::Multiple
        }
    }

    /// Display label used in the combination report
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FewerThanThree => "<3",
            Self::Multiple => "Multiple",
        }
    }
}

/// One row of the merged combination report
#[derive(Debug, Clone)]
pub struct CombinationRow {
    /// Exact condition set of the group
    pub conditions: ConditionSet,
    /// Human-readable label, sentinel for the empty set
    pub label: String,
    /// Number of members whose exact set is this combination
    pub member_count: u64,
    /// The group's nine raw payment sums
    pub payments: PaymentTotals,
    /// Combination size from the occurrence join, when matched
    pub number_of_conditions: Option<usize>,
    /// Subset-inclusive occurrence count, when matched
    pub total_occurrence: Option<u64>,
    /// Condition-count category of the exact set
    pub chronic_condition_count: ConditionCountCategory,
}

/// Merge cost groups with occurrence counts into the combination report
///
/// Every cost group appears exactly once in the output, whether or not an
/// occurrence row matches. Rows are ordered by exact-set key string, which
/// puts the sentinel row first.
#[must_use]
pub fn merge_report(costs: &CostGroups, occurrences: &OccurrenceCounts) -> Vec<CombinationRow> {
    info!(
        "Merging {} exact condition sets with {} realized combinations",
        costs.len(),
        occurrences.len()
    );

    let mut rows: Vec<CombinationRow> = costs
        .iter()
        .map(|(set, group)| {
            let occurrence = occurrences.get(set).copied();
            CombinationRow {
                conditions: *set,
                label: if set.is_empty() {
                    NO_CONDITIONS_LABEL.to_string()
                } else {
                    set.key()
                },
                member_count: group.member_count,
                payments: group.payments,
                number_of_conditions: occurrence.map(|_| set.len()),
                total_occurrence: occurrence,
                chronic_condition_count: ConditionCountCategory::from_count(set.len()),
            }
        })
        .collect();

    rows.sort_by_cached_key(|row| row.conditions.key());
    rows
}
