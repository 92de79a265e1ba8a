//! Run-level population statistics
//!
//! Descriptive counts for a completed run: population size, per-condition
//! prevalence, and how many combinations the population actually realizes.
//! Logged at the end of a run and serialized to the JSON run summary.

use serde::Serialize;

use crate::algorithm::cost::CostGroups;
use crate::algorithm::occurrence::OccurrenceCounts;
use crate::models::{ALL_CONDITIONS, Condition, Member};

/// Prevalence of one tracked condition
#[derive(Debug, Clone, Serialize)]
pub struct ConditionPrevalence {
    /// Flag column code of the condition
    pub condition: String,
    /// Number of members with the flag set
    pub members: u64,
    /// Share of the total population, in percent
    pub share: f64,
}

/// Statistics for one study run
#[derive(Debug, Clone, Serialize)]
pub struct StudyStatistics {
    /// Total number of members
    pub population_size: usize,
    /// Total number of loaded claim records
    pub claim_count: usize,
    /// Members with at least one chronic condition
    pub members_with_conditions: usize,
    /// Mean number of active conditions per member
    pub mean_conditions_per_member: f64,
    /// Distinct exact condition sets observed in the population
    pub realized_exact_sets: usize,
    /// Distinct condition combinations realized by at least one member
    pub realized_combinations: usize,
    /// Per-condition prevalence, canonical condition order
    pub condition_prevalence: Vec<ConditionPrevalence>,
}

impl StudyStatistics {
    /// Calculate statistics from the loaded records and the engine output
    #[must_use]
    pub fn calculate(
        members: &[Member],
        claim_count: usize,
        costs: &CostGroups,
        occurrences: &OccurrenceCounts,
    ) -> Self {
        let population_size = members.len();
        let members_with_conditions = members
            .iter()
            .filter(|m| !m.conditions.is_empty())
            .count();
        let total_conditions: usize = members.iter().map(Member::condition_count).sum();
        let mean_conditions_per_member = if population_size == 0 {
            0.0
        } else {
            total_conditions as f64 / population_size as f64
        };

        let condition_prevalence = ALL_CONDITIONS
            .iter()
            .map(|condition| condition_prevalence_of(members, *condition))
            .collect();

        Self {
            population_size,
            claim_count,
            members_with_conditions,
            mean_conditions_per_member,
            realized_exact_sets: costs.len(),
            realized_combinations: occurrences.len(),
            condition_prevalence,
        }
    }

    /// Multi-line human-readable summary for the run log
    #[must_use]
    pub fn summary(&self) -> String {
        let mut summary = String::new();
        summary.push_str("Study Run Summary:\n");
        summary.push_str(&format!("  Population Size: {}\n", self.population_size));
        summary.push_str(&format!("  Claim Records: {}\n", self.claim_count));
        summary.push_str(&format!(
            "  Members With Conditions: {}\n",
            self.members_with_conditions
        ));
        summary.push_str(&format!(
            "  Mean Conditions Per Member: {:.2}\n",
            self.mean_conditions_per_member
        ));
        summary.push_str(&format!(
            "  Realized Exact Sets: {}\n",
            self.realized_exact_sets
        ));
        summary.push_str(&format!(
            "  Realized Combinations: {}\n",
            self.realized_combinations
        ));

        summary.push_str("  Condition Prevalence:\n");
        for prevalence in &self.condition_prevalence {
            summary.push_str(&format!(
                "    {}: {} ({:.1}%)\n",
                prevalence.condition, prevalence.members, prevalence.share
            ));
        }

        summary
    }
}

/// Prevalence of one condition across the population
fn condition_prevalence_of(members: &[Member], condition: Condition) -> ConditionPrevalence {
    let count = members
        .iter()
        .filter(|m| m.conditions.contains(condition))
        .count() as u64;
    let share = if members.is_empty() {
        0.0
    } else {
        count as f64 * 100.0 / members.len() as f64
    };
    ConditionPrevalence {
        condition: condition.code().to_string(),
        members: count,
        share,
    }
}
