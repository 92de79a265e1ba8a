//! Tests for run-level statistics

use synpuf_study::algorithm::cost::aggregate_costs;
use synpuf_study::algorithm::occurrence::tally_occurrences;
use synpuf_study::algorithm::statistics::StudyStatistics;
use synpuf_study::models::{CONDITION_COUNT, Condition};

use crate::utils::member;

#[test]
fn test_statistics_for_small_population() {
    let members = vec![
        member("M1", &[Condition::Diabetes]),
        member("M2", &[Condition::Diabetes, Condition::HeartFailure]),
        member("M3", &[]),
    ];
    let costs = aggregate_costs(&members);
    let occurrences = tally_occurrences(&members);

    let stats = StudyStatistics::calculate(&members, 10, &costs, &occurrences);

    assert_eq!(stats.population_size, 3);
    assert_eq!(stats.claim_count, 10);
    assert_eq!(stats.members_with_conditions, 2);
    assert!((stats.mean_conditions_per_member - 1.0).abs() < 1e-9);
    assert_eq!(stats.realized_exact_sets, 3);
    assert_eq!(stats.realized_combinations, 3);

    assert_eq!(stats.condition_prevalence.len(), CONDITION_COUNT);
    let diabetes = stats
        .condition_prevalence
        .iter()
        .find(|p| p.condition == "SP_DIABETES")
        .unwrap();
    assert_eq!(diabetes.members, 2);
    assert!((diabetes.share - 66.666).abs() < 0.01);
}

#[test]
fn test_statistics_degrade_on_empty_population() {
    let stats = StudyStatistics::calculate(
        &[],
        0,
        &Default::default(),
        &Default::default(),
    );

    assert_eq!(stats.population_size, 0);
    assert_eq!(stats.members_with_conditions, 0);
    assert_eq!(stats.mean_conditions_per_member, 0.0);
    assert_eq!(stats.realized_exact_sets, 0);
    assert!(stats.condition_prevalence.iter().all(|p| p.members == 0));
}

#[test]
fn test_summary_mentions_population_size() {
    let members = vec![member("M1", &[])];
    let stats = StudyStatistics::calculate(
        &members,
        0,
        &aggregate_costs(&members),
        &tally_occurrences(&members),
    );

    let summary = stats.summary();
    assert!(summary.contains("Population Size: 1"));
    assert!(summary.contains("SP_DIABETES"));
}
