//! A Rust library for analyzing chronic condition combinations, costs and
//! demographics in per-member health claims data.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod reader;
pub mod report;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use config::StudyConfig;
pub use error::{Result, StudyError};
pub use models::{
    ALL_CONDITIONS, CONDITION_COUNT, Condition, ConditionSet, Member, MemberRow, OutpatientClaim,
    PaymentTotals,
};

// Engine and summarizer
pub use algorithm::{
    CombinationRow, CostGroups, DistributionRow, GroupingAttribute, OccurrenceCounts,
    StudyStatistics, aggregate_costs, merge_report, summarize, tally_occurrences,
};

// Record loaders
pub use reader::{load_claims, load_members};
