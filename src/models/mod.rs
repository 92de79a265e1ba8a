//! Domain models for the study
//!
//! Typed records for members and claims, the closed chronic-condition set,
//! payment accumulators and the shared demographic code enums.

pub mod claim;
pub mod condition;
pub mod member;
pub mod payment;
pub mod types;

pub use claim::{ClaimRow, OutpatientClaim};
pub use condition::{ALL_CONDITIONS, CONDITION_COUNT, Condition, ConditionSet};
pub use member::{Member, MemberRow};
pub use payment::PaymentTotals;
pub use types::{AgeBucket, RaceCode, Sex};

use chrono::NaiveDate;

/// Parse a numeric YYYYMMDD value into a date
///
/// Returns `None` when the digits do not form a valid calendar date.
#[must_use]
pub fn date_from_yyyymmdd(value: u32) -> Option<NaiveDate> {
    let year = i32::try_from(value / 10_000).ok()?;
    let month = value / 100 % 100;
    let day = value % 100;
    NaiveDate::from_ymd_opt(year, month, day)
}
