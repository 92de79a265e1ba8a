//! Tests for the demographic distribution summarizer

use synpuf_study::algorithm::distribution::{
    CohortValue, GroupingAttribute, summarize, summarize_attribute,
};
use synpuf_study::models::{CONDITION_COUNT, Condition, Member, RaceCode, Sex};

use crate::utils::member;

const REFERENCE_YEAR: i32 = 2008;

fn population() -> Vec<Member> {
    let mut m1 = member("M1", &[Condition::Diabetes]);
    m1.sex = Sex::Male;
    m1.race = RaceCode::White;

    let mut m2 = member("M2", &[Condition::Diabetes, Condition::HeartFailure]);
    m2.sex = Sex::Female;
    m2.race = RaceCode::White;

    let mut m3 = member("M3", &[]);
    m3.sex = Sex::Female;
    m3.race = RaceCode::Black;
    m3.esrd = true;

    let mut m4 = member("M4", &[Condition::HeartFailure]);
    m4.sex = Sex::Male;
    m4.race = RaceCode::White;

    vec![m1, m2, m3, m4]
}

#[test]
fn test_population_shares_sum_to_100() {
    for attribute in GroupingAttribute::ALL {
        let rows = summarize_attribute(&population(), attribute, REFERENCE_YEAR);
        let sum: f64 = rows.iter().map(|r| r.population_share).sum();
        assert!(
            (sum - 100.0).abs() < 0.1,
            "population shares for {} sum to {sum}",
            attribute.name()
        );
    }
}

#[test]
fn test_condition_shares_sum_to_100_for_present_conditions() {
    let members = population();
    for attribute in GroupingAttribute::ALL {
        let rows = summarize_attribute(&members, attribute, REFERENCE_YEAR);
        for condition in [Condition::Diabetes, Condition::HeartFailure] {
            let sum: f64 = rows
                .iter()
                .map(|r| r.condition_shares[condition.index()])
                .sum();
            assert!(
                (sum - 100.0).abs() < 0.5,
                "{} shares for {} sum to {sum}",
                condition.code(),
                attribute.name()
            );
        }
    }
}

#[test]
fn test_absent_conditions_report_zero_everywhere() {
    let rows = summarize_attribute(&population(), GroupingAttribute::Sex, REFERENCE_YEAR);
    for row in &rows {
        assert_eq!(row.condition_shares[Condition::Cancer.index()], 0.0);
    }
}

#[test]
fn test_cohorts_without_condition_members_report_zero_not_omitted() {
    // ESRD cohort "Y" holds only M3, who has no conditions; both condition
    // columns must still carry a row with 0%
    let rows = summarize_attribute(&population(), GroupingAttribute::Esrd, REFERENCE_YEAR);
    assert_eq!(rows.len(), 2);

    let esrd_row = rows
        .iter()
        .find(|r| r.cohort == CohortValue::Label("Y".to_string()))
        .unwrap();
    assert_eq!(esrd_row.population_share, 25.0);
    assert_eq!(esrd_row.condition_shares[Condition::Diabetes.index()], 0.0);
    assert_eq!(
        esrd_row.condition_shares[Condition::HeartFailure.index()],
        0.0
    );
}

#[test]
fn test_no_condition_member_counts_toward_population_only() {
    let rows = summarize_attribute(&population(), GroupingAttribute::Race, REFERENCE_YEAR);

    // M3 is the only Black member: 25% of the population, 0% of every
    // condition sub-population
    let black_row = rows
        .iter()
        .find(|r| r.cohort == CohortValue::Code(i64::from(RaceCode::Black.code())))
        .unwrap();
    assert_eq!(black_row.population_share, 25.0);
    for share in &black_row.condition_shares {
        assert_eq!(*share, 0.0);
    }
}

#[test]
fn test_condition_share_uses_condition_subpopulation_denominator() {
    let rows = summarize_attribute(&population(), GroupingAttribute::Sex, REFERENCE_YEAR);

    // Two members have heart failure: one male (M4), one female (M2)
    let male_row = rows
        .iter()
        .find(|r| r.cohort == CohortValue::Code(1))
        .unwrap();
    assert_eq!(
        male_row.condition_shares[Condition::HeartFailure.index()],
        50.0
    );
    // Diabetes is split the same way
    assert_eq!(male_row.condition_shares[Condition::Diabetes.index()], 50.0);
}

#[test]
fn test_total_conditions_grouping() {
    let rows = summarize_attribute(
        &population(),
        GroupingAttribute::TotalConditions,
        REFERENCE_YEAR,
    );

    let cohorts: Vec<_> = rows.iter().map(|r| r.cohort.clone()).collect();
    assert_eq!(
        cohorts,
        vec![
            CohortValue::Code(0),
            CohortValue::Code(1),
            CohortValue::Code(2)
        ]
    );
    // Two members have exactly one condition
    assert_eq!(rows[1].population_share, 50.0);
}

#[test]
fn test_stacked_summary_keeps_attribute_order() {
    let rows = summarize(&population(), REFERENCE_YEAR);
    assert!(!rows.is_empty());

    let mut seen = Vec::new();
    for row in &rows {
        if seen.last() != Some(&row.attribute) {
            seen.push(row.attribute);
        }
    }
    assert_eq!(seen, GroupingAttribute::ALL.to_vec());
}

#[test]
fn test_attribute_names_match_report_contract() {
    assert_eq!(GroupingAttribute::AgeBucket.name(), "age_bucket");
    assert_eq!(GroupingAttribute::Race.name(), "BENE_RACE_CD");
    assert_eq!(GroupingAttribute::Esrd.name(), "BENE_ESRD_IND");
    assert_eq!(GroupingAttribute::State.name(), "SP_STATE_CODE");
    assert_eq!(GroupingAttribute::Sex.name(), "BENE_SEX_IDENT_CD");
    assert_eq!(GroupingAttribute::TotalConditions.name(), "total_conditions");
}

#[test]
fn test_empty_population_yields_empty_summary() {
    let rows = summarize(&[], REFERENCE_YEAR);
    assert!(rows.is_empty());
}

#[test]
fn test_rounding_precision() {
    // Three members in one cohort of seven: 3/7 = 42.857...
    let mut members = Vec::new();
    for i in 0..7 {
        let mut m = member(&format!("M{i}"), &[Condition::Diabetes]);
        m.sex = if i < 3 { Sex::Male } else { Sex::Female };
        members.push(m);
    }

    let rows = summarize_attribute(&members, GroupingAttribute::Sex, REFERENCE_YEAR);
    let male_row = rows
        .iter()
        .find(|r| r.cohort == CohortValue::Code(1))
        .unwrap();
    // Population share rounds to 2 decimals, condition shares to 1
    assert_eq!(male_row.population_share, 42.86);
    assert_eq!(male_row.condition_shares[Condition::Diabetes.index()], 42.9);
}

#[test]
fn test_row_share_arrays_cover_all_conditions() {
    let rows = summarize_attribute(&population(), GroupingAttribute::State, REFERENCE_YEAR);
    for row in &rows {
        assert_eq!(row.condition_shares.len(), CONDITION_COUNT);
    }
}
