//! End-to-end pipeline tests

use std::fs;

use synpuf_study::report::{
    COMBINATION_REPORT_FILE, DISTRIBUTION_REPORT_FILE, RUN_SUMMARY_FILE,
};
use synpuf_study::{StudyConfig, StudyError, pipeline};

use crate::utils::scratch_dir;

const MEMBER_HEADER: &str = "DESYNPUF_ID,BENE_BIRTH_DT,BENE_SEX_IDENT_CD,BENE_RACE_CD,BENE_ESRD_IND,SP_STATE_CODE,SP_ALZHDMTA,SP_CHF,SP_CHRNKIDN,SP_CNCR,SP_COPD,SP_DEPRESSN,SP_DIABETES,SP_ISCHMCHT,SP_OSTEOPRS,SP_RA_OA,SP_STRKETIA,MEDREIMB_IP,BENRES_IP,PPPYMT_IP,MEDREIMB_OP,BENRES_OP,PPPYMT_OP,MEDREIMB_CAR,BENRES_CAR,PPPYMT_CAR";

const CLAIMS_HEADER: &str =
    "DESYNPUF_ID,CLM_ID,CLM_FROM_DT,CLM_THRU_DT,CLM_PMT_AMT,NCH_PRMRY_PYR_CLM_PD_AMT";

/// Write the three-member scenario into a data directory:
/// M1 {diabetes}, M2 {diabetes, heart failure}, M3 {}
fn write_fixture(name: &str) -> StudyConfig {
    let base = scratch_dir(name);
    let data_dir = base.join("data");
    let output_dir = base.join("results");
    fs::create_dir_all(&data_dir).unwrap();

    let members = format!(
        "{MEMBER_HEADER}\n\
         M1,19350101,1,1,0,10,2,2,2,2,2,2,1,2,2,2,2,10,1,0,5,1,0,3,1,0\n\
         M2,19420315,2,1,0,10,2,1,2,2,2,2,1,2,2,2,2,20,2,0,8,2,0,6,2,0\n\
         M3,19451120,2,2,0,11,2,2,2,2,2,2,2,2,2,2,2,1,1,1,1,1,1,1,1,1\n"
    );
    fs::write(data_dir.join("members.csv"), members).unwrap();

    let claims = format!(
        "{CLAIMS_HEADER}\n\
         M1,100,20080904,20080904,50,0\n\
         M2,101,20090211,20090211,30.5,0\n"
    );
    fs::write(data_dir.join("claims.csv"), claims).unwrap();

    StudyConfig {
        data_dir,
        output_dir,
        member_file: "members.csv".to_string(),
        claims_file: "claims.csv".to_string(),
        reference_year: 2008,
    }
}

#[test]
fn test_pipeline_produces_all_artifacts() {
    let config = write_fixture("pipeline_artifacts");
    let statistics = pipeline::run(&config).unwrap();

    assert_eq!(statistics.population_size, 3);
    assert_eq!(statistics.claim_count, 2);
    assert_eq!(statistics.realized_exact_sets, 3);

    assert!(config.output_dir.join(COMBINATION_REPORT_FILE).is_file());
    assert!(config.output_dir.join(DISTRIBUTION_REPORT_FILE).is_file());
    assert!(config.output_dir.join(RUN_SUMMARY_FILE).is_file());
}

#[test]
fn test_pipeline_combination_numbers() {
    let config = write_fixture("pipeline_numbers");
    pipeline::run(&config).unwrap();

    let content =
        fs::read_to_string(config.output_dir.join(COMBINATION_REPORT_FILE)).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    // Header plus one row per exact set
    assert_eq!(lines.len(), 4);

    // Sentinel row first: M3 with every payment field of 1
    assert!(lines[1].starts_with("NO CHRONIC CONDITIONS,1,1,1,1,1,1,1,1,1,1,"));

    // M2's exact set, occurrence 1
    let pair_row = lines
        .iter()
        .find(|l| l.starts_with("\"SP_CHF, SP_DIABETES\","))
        .unwrap();
    assert!(pair_row.contains(",2,1,<3,"));

    // M1's exact set: diabetes occurs in two members
    let single_row = lines
        .iter()
        .find(|l| l.starts_with("SP_DIABETES,"))
        .unwrap();
    assert!(single_row.contains(",1,2,<3,"));
}

#[test]
fn test_pipeline_distribution_covers_every_attribute() {
    let config = write_fixture("pipeline_distribution");
    pipeline::run(&config).unwrap();

    let content =
        fs::read_to_string(config.output_dir.join(DISTRIBUTION_REPORT_FILE)).unwrap();
    for name in [
        "age_bucket",
        "BENE_RACE_CD",
        "BENE_ESRD_IND",
        "SP_STATE_CODE",
        "BENE_SEX_IDENT_CD",
        "total_conditions",
    ] {
        assert!(
            content.lines().any(|l| l.starts_with(&format!("{name},"))),
            "missing rows for {name}"
        );
    }
}

#[test]
fn test_pipeline_fails_fast_on_missing_input() {
    let base = scratch_dir("pipeline_missing");
    let config = StudyConfig {
        data_dir: base.join("data"),
        output_dir: base.join("results"),
        ..StudyConfig::default()
    };

    let result = pipeline::run(&config);
    assert!(matches!(result, Err(StudyError::MissingInput(_))));
    // No partial output
    assert!(!config.output_dir.exists());
}
