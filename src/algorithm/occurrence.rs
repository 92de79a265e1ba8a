//! Combination occurrence tally
//!
//! For every member, every non-empty subset of the member's active
//! conditions is credited with one occurrence. Counting is therefore
//! subset-inclusive: a combination's count is the number of members whose
//! condition set contains it, not the number whose set equals it. Exact-set
//! counting lives in the cost aggregation, which uses the opposite
//! equivalence.

use log::info;
use rayon::prelude::*;
use rustc_hash::FxHashMap;

use crate::models::{ConditionSet, Member};
use crate::utils::progress;

/// Population-wide occurrence counter keyed by canonical combination
pub type OccurrenceCounts = FxHashMap<ConditionSet, u64>;

/// Population size below which the tally stays on one thread
const PARALLEL_THRESHOLD: usize = 10_000;

/// Tally combination occurrences across the population
///
/// Picks the parallel path for large populations and the sequential path
/// otherwise; both produce identical counters.
#[must_use]
pub fn tally_occurrences(members: &[Member]) -> OccurrenceCounts {
    if members.len() >= PARALLEL_THRESHOLD {
        tally_occurrences_parallel(members)
    } else {
        tally_occurrences_sequential(members)
    }
}

/// Single-threaded occurrence tally
#[must_use]
pub fn tally_occurrences_sequential(members: &[Member]) -> OccurrenceCounts {
    let mut counts = OccurrenceCounts::default();
    for member in members {
        tally_member(&mut counts, member);
    }
    counts
}

/// Parallel occurrence tally for large populations
///
/// Members are sharded into chunks, each worker folds a local counter, and
/// the local counters merge by key-wise summation. Summation is commutative
/// and associative, so the merge order does not affect the result.
#[must_use]
pub fn tally_occurrences_parallel(members: &[Member]) -> OccurrenceCounts {
    let num_threads = num_cpus::get().max(1);
    let chunk_size = members.len().div_ceil(num_threads * 4).max(1);
    info!("Tallying condition combinations with {num_threads} threads");

    let pb = progress::create_main_progress_bar(
        members.len() as u64,
        Some("Counting condition combinations"),
    );

    let counts = members
        .par_chunks(chunk_size)
        .map(|chunk| {
            let mut local = OccurrenceCounts::default();
            for member in chunk {
                tally_member(&mut local, member);
            }
            pb.inc(chunk.len() as u64);
            local
        })
        .reduce(OccurrenceCounts::default, merge_counts);

    progress::finish_progress_bar(&pb, Some("Combination tally complete"));
    counts
}

/// Credit every non-empty subset of one member's condition set
fn tally_member(counts: &mut OccurrenceCounts, member: &Member) {
    for subset in member.conditions.subsets() {
        *counts.entry(subset).or_insert(0) += 1;
    }
}

/// Key-wise merge of two occurrence counters
#[must_use]
pub fn merge_counts(mut left: OccurrenceCounts, right: OccurrenceCounts) -> OccurrenceCounts {
    for (key, count) in right {
        *left.entry(key).or_insert(0) += count;
    }
    left
}
