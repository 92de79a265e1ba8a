//! Demographic distribution summarizer
//!
//! For a grouping attribute, computes the share of the total population in
//! each cohort and, per tracked condition, the share of that condition's
//! sub-population in each cohort. Cohorts are the values observed in the
//! base population; a condition with no members in a cohort reports 0%
//! rather than dropping the row. The supported attributes are a closed
//! enumeration, not reflection over record fields.

use std::fmt;

use itertools::Itertools;
use log::info;
use rustc_hash::FxHashMap;

use crate::models::{CONDITION_COUNT, Member};

/// Demographic grouping attributes supported by the summarizer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupingAttribute {
    /// Age bucket at the reference year
    AgeBucket,
    /// Race code
    Race,
    /// End-stage renal disease indicator
    Esrd,
    /// State code
    State,
    /// Sex code
    Sex,
    /// Number of active chronic conditions
    TotalConditions,
}

impl GroupingAttribute {
    /// All attributes in report stacking order
    pub const ALL: [Self; 6] = [
        Self::AgeBucket,
        Self::Race,
        Self::Esrd,
        Self::State,
        Self::Sex,
        Self::TotalConditions,
    ];

    /// Column-contract name of the attribute in the distribution report
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::AgeBucket => "age_bucket",
            Self::Race => "BENE_RACE_CD",
            Self::Esrd => "BENE_ESRD_IND",
            Self::State => "SP_STATE_CODE",
            Self::Sex => "BENE_SEX_IDENT_CD",
            Self::TotalConditions => "total_conditions",
        }
    }

    /// Cohort value of one member under this attribute
    ///
    /// `None` means the member has no usable value for the attribute (an
    /// unparseable birth date for the age bucket) and is left out of that
    /// attribute's tallies.
    #[must_use]
    pub fn cohort(self, member: &Member, reference_year: i32) -> Option<CohortValue> {
        match self {
            Self::AgeBucket => member
                .age_bucket(reference_year)
                .map(|bucket| CohortValue::Label(bucket.label().to_string())),
            Self::Race => Some(CohortValue::Code(i64::from(member.race.code()))),
            Self::Esrd => Some(CohortValue::Label(
                if member.esrd { "Y" } else { "0" }.to_string(),
            )),
            Self::State => Some(CohortValue::Code(i64::from(member.state_code))),
            Self::Sex => Some(CohortValue::Code(i64::from(member.sex.code()))),
            Self::TotalConditions => {
                Some(CohortValue::Code(member.condition_count() as i64))
            }
        }
    }
}

/// A single cohort value of a grouping attribute
///
/// Numeric codes order numerically, labels lexically; the derived ordering
/// matches the sorted cohort enumeration of the report.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CohortValue {
    /// Numeric source code
    Code(i64),
    /// Textual label
    Label(String),
}

impl fmt::Display for CohortValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Code(code) => write!(f, "{code}"),
            Self::Label(label) => f.write_str(label),
        }
    }
}

/// One row of the stacked distribution report
#[derive(Debug, Clone)]
pub struct DistributionRow {
    /// Attribute the row was grouped by
    pub attribute: GroupingAttribute,
    /// Cohort value within the attribute
    pub cohort: CohortValue,
    /// Percentage of the total population in this cohort, 2 decimals
    pub population_share: f64,
    /// Percentage of each condition's sub-population in this cohort,
    /// canonical condition order, 1 decimal
    pub condition_shares: [f64; CONDITION_COUNT],
}

/// Summarize every supported attribute and stack the rows
#[must_use]
pub fn summarize(members: &[Member], reference_year: i32) -> Vec<DistributionRow> {
    GroupingAttribute::ALL
        .iter()
        .flat_map(|attribute| summarize_attribute(members, *attribute, reference_year))
        .collect()
}

/// Summarize the population under one grouping attribute
///
/// Population shares use the full population as denominator; condition
/// shares use the members of that condition with a known cohort value. An
/// empty population produces no rows.
#[must_use]
pub fn summarize_attribute(
    members: &[Member],
    attribute: GroupingAttribute,
    reference_year: i32,
) -> Vec<DistributionRow> {
    let total_members = members.len();

    let mut base_counts: FxHashMap<CohortValue, u64> = FxHashMap::default();
    let mut condition_totals = [0u64; CONDITION_COUNT];
    let mut condition_counts: [FxHashMap<CohortValue, u64>; CONDITION_COUNT] =
        std::array::from_fn(|_| FxHashMap::default());

    for member in members {
        let Some(cohort) = attribute.cohort(member, reference_year) else {
            continue;
        };
        *base_counts.entry(cohort.clone()).or_insert(0) += 1;
        for condition in member.active_conditions() {
            let idx = condition.index();
            condition_totals[idx] += 1;
            *condition_counts[idx].entry(cohort.clone()).or_insert(0) += 1;
        }
    }

    let cohorts: Vec<CohortValue> = base_counts.keys().cloned().sorted().collect();
    info!(
        "Summarized {} cohorts for grouping attribute {}",
        cohorts.len(),
        attribute.name()
    );

    cohorts
        .into_iter()
        .map(|cohort| {
            let base = base_counts.get(&cohort).copied().unwrap_or(0);
            let population_share = round_to(base as f64 * 100.0 / total_members as f64, 2);
            let condition_shares = std::array::from_fn(|idx| {
                if condition_totals[idx] == 0 {
                    0.0
                } else {
                    let count = condition_counts[idx].get(&cohort).copied().unwrap_or(0);
                    round_to(count as f64 * 100.0 / condition_totals[idx] as f64, 1)
                }
            });
            DistributionRow {
                attribute,
                cohort,
                population_share,
                condition_shares,
            }
        })
        .collect()
}

/// Round to a fixed number of decimal places
fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}
