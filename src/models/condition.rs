//! Chronic condition codes and combination keys
//!
//! The tracked conditions are the fixed set of beneficiary flag columns in
//! the source data. `ConditionSet` is the canonical, order-independent key
//! for a subset of conditions, encoded as a bitmask over the fixed column
//! order, so two members with the same conditions in any order always
//! produce the identical key.

use smallvec::SmallVec;
use std::fmt;

/// Number of tracked chronic conditions
pub const CONDITION_COUNT: usize = 11;

/// Chronic condition tracked by a beneficiary flag column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Condition {
    /// Alzheimer's disease or related disorders
    Alzheimer,
    /// Heart failure
    HeartFailure,
    /// Chronic kidney disease
    ChronicKidneyDisease,
    /// Cancer
    Cancer,
    /// Chronic obstructive pulmonary disease
    Copd,
    /// Depression
    Depression,
    /// Diabetes
    Diabetes,
    /// Ischemic heart disease
    IschemicHeartDisease,
    /// Osteoporosis
    Osteoporosis,
    /// Rheumatoid arthritis or osteoarthritis
    RheumatoidArthritis,
    /// Stroke or transient ischemic attack
    Stroke,
}

/// All tracked conditions in canonical column order
pub const ALL_CONDITIONS: [Condition; CONDITION_COUNT] = [
    Condition::Alzheimer,
    Condition::HeartFailure,
    Condition::ChronicKidneyDisease,
    Condition::Cancer,
    Condition::Copd,
    Condition::Depression,
    Condition::Diabetes,
    Condition::IschemicHeartDisease,
    Condition::Osteoporosis,
    Condition::RheumatoidArthritis,
    Condition::Stroke,
];

impl Condition {
    /// Flag column code of this condition in the source data
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Alzheimer => "SP_ALZHDMTA",
            Self::HeartFailure => "SP_CHF",
            Self::ChronicKidneyDisease => "SP_CHRNKIDN",
            Self::Cancer => "SP_CNCR",
            Self::Copd => "SP_COPD",
            Self::Depression => "SP_DEPRESSN",
            Self::Diabetes => "SP_DIABETES",
            Self::IschemicHeartDisease => "SP_ISCHMCHT",
            Self::Osteoporosis => "SP_OSTEOPRS",
            Self::RheumatoidArthritis => "SP_RA_OA",
            Self::Stroke => "SP_STRKETIA",
        }
    }

    /// Position of this condition in the canonical column order
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Look up a condition from its flag column code
    ///
    /// Returns `None` for columns outside the fixed condition set, which
    /// keeps unknown flag columns out of every aggregation.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        ALL_CONDITIONS.iter().copied().find(|c| c.code() == code)
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Canonical, order-independent key for a subset of conditions
///
/// Bit `i` corresponds to `ALL_CONDITIONS[i]`. The empty set is a valid key
/// and identifies members with no chronic conditions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConditionSet(u16);

impl ConditionSet {
    /// The empty combination
    pub const EMPTY: Self = Self(0);

    /// Build a key from a collection of conditions, deduplicating by bit
    #[must_use]
    pub fn from_conditions<I: IntoIterator<Item = Condition>>(conditions: I) -> Self {
        let mut set = Self::EMPTY;
        for condition in conditions {
            set.insert(condition);
        }
        set
    }

    /// Add a condition to the set
    pub const fn insert(&mut self, condition: Condition) {
        self.0 |= 1 << condition.index();
    }

    /// Whether the set contains a condition
    #[must_use]
    pub const fn contains(self, condition: Condition) -> bool {
        self.0 & (1 << condition.index()) != 0
    }

    /// Whether every condition of `self` is also in `other`
    #[must_use]
    pub const fn is_subset_of(self, other: Self) -> bool {
        self.0 & other.0 == self.0
    }

    /// Whether the set has no conditions
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of conditions in the set
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Conditions of the set in canonical column order
    #[must_use]
    pub fn conditions(self) -> SmallVec<[Condition; CONDITION_COUNT]> {
        ALL_CONDITIONS
            .iter()
            .copied()
            .filter(|c| self.contains(*c))
            .collect()
    }

    /// Canonical comma-joined key string, empty for the empty set
    #[must_use]
    pub fn key(self) -> String {
        let mut key = String::new();
        for condition in self.conditions() {
            if !key.is_empty() {
                key.push_str(", ");
            }
            key.push_str(condition.code());
        }
        key
    }

    /// Iterate every non-empty subset of this set
    ///
    /// A set of k conditions yields 2^k - 1 subsets, each itself a canonical
    /// key. The walk is the standard descending sub-bitmask enumeration and
    /// never materializes the full power set of the tracked columns.
    #[must_use]
    pub const fn subsets(self) -> SubsetIter {
        SubsetIter {
            mask: self.0,
            sub: self.0,
            done: self.0 == 0,
        }
    }

    /// Raw bitmask value
    #[must_use]
    pub const fn bits(self) -> u16 {
        self.0
    }
}

impl fmt::Display for ConditionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}

/// Iterator over the non-empty subsets of a combination key
#[derive(Debug, Clone)]
pub struct SubsetIter {
    mask: u16,
    sub: u16,
    done: bool,
}

impl Iterator for SubsetIter {
    type Item = ConditionSet;

    fn next(&mut self) -> Option<ConditionSet> {
        if self.done {
            return None;
        }
        let current = self.sub;
        self.sub = current.wrapping_sub(1) & self.mask;
        if self.sub == 0 {
            self.done = true;
        }
        Some(ConditionSet(current))
    }
}
