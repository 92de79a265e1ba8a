//! Aggregation algorithms
//!
//! The combination and cost aggregation engine (occurrence tally, exact-set
//! cost grouping, report merge), the demographic distribution summarizer,
//! and run-level statistics.

pub mod cost;
pub mod distribution;
pub mod merge;
pub mod occurrence;
pub mod statistics;

pub use cost::{CostGroup, CostGroups, aggregate_costs};
pub use distribution::{
    CohortValue, DistributionRow, GroupingAttribute, summarize, summarize_attribute,
};
pub use merge::{CombinationRow, ConditionCountCategory, NO_CONDITIONS_LABEL, merge_report};
pub use occurrence::{OccurrenceCounts, tally_occurrences};
pub use statistics::StudyStatistics;
