//! Shared fixtures for the test suite

use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;
use synpuf_study::models::{Condition, ConditionSet, Member, PaymentTotals, RaceCode, Sex};

/// Build a member with the given conditions and zeroed payments
#[must_use]
pub fn member(id: &str, conditions: &[Condition]) -> Member {
    member_with_payments(id, conditions, PaymentTotals::default())
}

/// Build a member with the given conditions and payments
#[must_use]
pub fn member_with_payments(
    id: &str,
    conditions: &[Condition],
    payments: PaymentTotals,
) -> Member {
    Member {
        id: id.to_string(),
        birth_date: NaiveDate::from_ymd_opt(1940, 6, 15),
        sex: Sex::Male,
        race: RaceCode::White,
        state_code: 1,
        esrd: false,
        conditions: ConditionSet::from_conditions(conditions.iter().copied()),
        payments,
    }
}

/// Payment totals with every raw field set to the same amount
#[must_use]
pub fn flat_payments(amount: f64) -> PaymentTotals {
    PaymentTotals {
        ip_medicare: amount,
        ip_beneficiary: amount,
        ip_pp: amount,
        op_medicare: amount,
        op_beneficiary: amount,
        op_pp: amount,
        carrier_medicare: amount,
        carrier_beneficiary: amount,
        carrier_pp: amount,
    }
}

/// Create a unique scratch directory for a test
#[must_use]
pub fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("synpuf_study_{}_{name}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir
}
