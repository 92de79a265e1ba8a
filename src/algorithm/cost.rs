//! Exact-set cost aggregation
//!
//! Members are grouped by their full active-condition set. Each group
//! carries the member count and the nine raw payment sums. The empty set is
//! a valid group: members with no chronic conditions appear in the cost
//! table under the sentinel label applied at merge time.

use log::info;
use rayon::prelude::*;
use rustc_hash::FxHashMap;

use crate::models::{ConditionSet, Member, PaymentTotals};

/// Accumulated costs for one exact condition set
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CostGroup {
    /// Number of members whose exact set is this key
    pub member_count: u64,
    /// Sum of the members' nine raw payment fields
    pub payments: PaymentTotals,
}

impl CostGroup {
    /// Fold one member into the group
    pub fn add_member(&mut self, member: &Member) {
        self.member_count += 1;
        self.payments.add(&member.payments);
    }

    /// Merge another partial group into this one
    pub fn merge(&mut self, other: &Self) {
        self.member_count += other.member_count;
        self.payments.add(&other.payments);
    }
}

/// Cost groups keyed by exact condition set
pub type CostGroups = FxHashMap<ConditionSet, CostGroup>;

/// Population size below which the aggregation stays on one thread
const PARALLEL_THRESHOLD: usize = 10_000;

/// Aggregate payment sums per exact condition set
#[must_use]
pub fn aggregate_costs(members: &[Member]) -> CostGroups {
    if members.len() >= PARALLEL_THRESHOLD {
        aggregate_costs_parallel(members)
    } else {
        aggregate_costs_sequential(members)
    }
}

/// Single-threaded cost aggregation
#[must_use]
pub fn aggregate_costs_sequential(members: &[Member]) -> CostGroups {
    let mut groups = CostGroups::default();
    for member in members {
        groups
            .entry(member.conditions)
            .or_default()
            .add_member(member);
    }
    groups
}

/// Parallel cost aggregation: per-chunk partial groups merged by addition
#[must_use]
pub fn aggregate_costs_parallel(members: &[Member]) -> CostGroups {
    let num_threads = num_cpus::get().max(1);
    let chunk_size = members.len().div_ceil(num_threads * 4).max(1);
    info!("Aggregating payment data with {num_threads} threads");

    members
        .par_chunks(chunk_size)
        .map(|chunk| {
            let mut local = CostGroups::default();
            for member in chunk {
                local.entry(member.conditions).or_default().add_member(member);
            }
            local
        })
        .reduce(CostGroups::default, merge_groups)
}

/// Key-wise merge of two partial cost aggregations
#[must_use]
pub fn merge_groups(mut left: CostGroups, right: CostGroups) -> CostGroups {
    for (key, group) in right {
        left.entry(key).or_default().merge(&group);
    }
    left
}
