//! Beneficiary member model
//!
//! `MemberRow` mirrors the source CSV columns one to one; `Member` is the
//! enriched domain record the engine and summarizer work with. Enrichment
//! derives the active-condition key, the condition count and the age bucket
//! without mutating the loaded row.

use chrono::{Datelike, NaiveDate};
use serde::Deserialize;
use smallvec::SmallVec;

use crate::models::condition::{ALL_CONDITIONS, CONDITION_COUNT, Condition, ConditionSet};
use crate::models::date_from_yyyymmdd;
use crate::models::payment::PaymentTotals;
use crate::models::types::{AgeBucket, RaceCode, Sex};

/// One row of the beneficiary summary file, as stored on disk
#[derive(Debug, Clone, Deserialize)]
pub struct MemberRow {
    /// Unique beneficiary identifier
    #[serde(rename = "DESYNPUF_ID")]
    pub id: String,
    /// Birth date as numeric YYYYMMDD
    #[serde(rename = "BENE_BIRTH_DT")]
    pub birth_date: Option<u32>,
    /// Sex code
    #[serde(rename = "BENE_SEX_IDENT_CD")]
    pub sex_code: Option<u8>,
    /// Race code
    #[serde(rename = "BENE_RACE_CD")]
    pub race_code: Option<u8>,
    /// End-stage renal disease indicator, "Y" when present
    #[serde(rename = "BENE_ESRD_IND")]
    pub esrd_indicator: Option<String>,
    /// State code
    #[serde(rename = "SP_STATE_CODE")]
    pub state_code: Option<u8>,

    /// Alzheimer flag, 1 = active
    #[serde(rename = "SP_ALZHDMTA")]
    pub sp_alzhdmta: Option<u8>,
    /// Heart failure flag
    #[serde(rename = "SP_CHF")]
    pub sp_chf: Option<u8>,
    /// Chronic kidney disease flag
    #[serde(rename = "SP_CHRNKIDN")]
    pub sp_chrnkidn: Option<u8>,
    /// Cancer flag
    #[serde(rename = "SP_CNCR")]
    pub sp_cncr: Option<u8>,
    /// COPD flag
    #[serde(rename = "SP_COPD")]
    pub sp_copd: Option<u8>,
    /// Depression flag
    #[serde(rename = "SP_DEPRESSN")]
    pub sp_depressn: Option<u8>,
    /// Diabetes flag
    #[serde(rename = "SP_DIABETES")]
    pub sp_diabetes: Option<u8>,
    /// Ischemic heart disease flag
    #[serde(rename = "SP_ISCHMCHT")]
    pub sp_ischmcht: Option<u8>,
    /// Osteoporosis flag
    #[serde(rename = "SP_OSTEOPRS")]
    pub sp_osteoprs: Option<u8>,
    /// Rheumatoid arthritis / osteoarthritis flag
    #[serde(rename = "SP_RA_OA")]
    pub sp_ra_oa: Option<u8>,
    /// Stroke / TIA flag
    #[serde(rename = "SP_STRKETIA")]
    pub sp_strketia: Option<u8>,

    /// Medicare reimbursement, inpatient
    #[serde(rename = "MEDREIMB_IP")]
    pub medreimb_ip: Option<f64>,
    /// Beneficiary responsibility, inpatient
    #[serde(rename = "BENRES_IP")]
    pub benres_ip: Option<f64>,
    /// Primary payer payment, inpatient
    #[serde(rename = "PPPYMT_IP")]
    pub pppymt_ip: Option<f64>,
    /// Medicare reimbursement, outpatient
    #[serde(rename = "MEDREIMB_OP")]
    pub medreimb_op: Option<f64>,
    /// Beneficiary responsibility, outpatient
    #[serde(rename = "BENRES_OP")]
    pub benres_op: Option<f64>,
    /// Primary payer payment, outpatient
    #[serde(rename = "PPPYMT_OP")]
    pub pppymt_op: Option<f64>,
    /// Medicare reimbursement, carrier
    #[serde(rename = "MEDREIMB_CAR")]
    pub medreimb_car: Option<f64>,
    /// Beneficiary responsibility, carrier
    #[serde(rename = "BENRES_CAR")]
    pub benres_car: Option<f64>,
    /// Primary payer payment, carrier
    #[serde(rename = "PPPYMT_CAR")]
    pub pppymt_car: Option<f64>,
}

impl MemberRow {
    /// Flag value of one tracked condition, in canonical column order
    fn flag(&self, condition: Condition) -> Option<u8> {
        match condition {
            Condition::Alzheimer => self.sp_alzhdmta,
            Condition::HeartFailure => self.sp_chf,
            Condition::ChronicKidneyDisease => self.sp_chrnkidn,
            Condition::Cancer => self.sp_cncr,
            Condition::Copd => self.sp_copd,
            Condition::Depression => self.sp_depressn,
            Condition::Diabetes => self.sp_diabetes,
            Condition::IschemicHeartDisease => self.sp_ischmcht,
            Condition::Osteoporosis => self.sp_osteoprs,
            Condition::RheumatoidArthritis => self.sp_ra_oa,
            Condition::Stroke => self.sp_strketia,
        }
    }
}

/// Enriched beneficiary record
#[derive(Debug, Clone)]
pub struct Member {
    /// Unique beneficiary identifier
    pub id: String,
    /// Birth date, when the source value decomposes to a valid date
    pub birth_date: Option<NaiveDate>,
    /// Sex of the member
    pub sex: Sex,
    /// Race of the member
    pub race: RaceCode,
    /// State code, 0 when absent
    pub state_code: u8,
    /// End-stage renal disease indicator
    pub esrd: bool,
    /// Active chronic conditions, canonical order
    pub conditions: ConditionSet,
    /// The member's own nine raw payment fields, missing values as zero
    pub payments: PaymentTotals,
}

impl From<MemberRow> for Member {
    fn from(row: MemberRow) -> Self {
        // A flag is active only when it is exactly 1; anything else,
        // including absence, means the condition is not present.
        let conditions = ConditionSet::from_conditions(
            ALL_CONDITIONS
                .iter()
                .copied()
                .filter(|c| row.flag(*c) == Some(1)),
        );

        let payments = PaymentTotals {
            ip_medicare: row.medreimb_ip.unwrap_or(0.0),
            ip_beneficiary: row.benres_ip.unwrap_or(0.0),
            ip_pp: row.pppymt_ip.unwrap_or(0.0),
            op_medicare: row.medreimb_op.unwrap_or(0.0),
            op_beneficiary: row.benres_op.unwrap_or(0.0),
            op_pp: row.pppymt_op.unwrap_or(0.0),
            carrier_medicare: row.medreimb_car.unwrap_or(0.0),
            carrier_beneficiary: row.benres_car.unwrap_or(0.0),
            carrier_pp: row.pppymt_car.unwrap_or(0.0),
        };

        Self {
            id: row.id,
            birth_date: row.birth_date.and_then(date_from_yyyymmdd),
            sex: row.sex_code.map_or(Sex::Unknown, Sex::from),
            race: row.race_code.map_or(RaceCode::Unknown, RaceCode::from),
            state_code: row.state_code.unwrap_or(0),
            esrd: row.esrd_indicator.as_deref() == Some("Y"),
            conditions,
            payments,
        }
    }
}

impl Member {
    /// Age at the reference year, by calendar year difference
    #[must_use]
    pub fn age_at(&self, reference_year: i32) -> Option<i32> {
        self.birth_date.map(|d| reference_year - d.year())
    }

    /// Age bucket at the reference year
    #[must_use]
    pub fn age_bucket(&self, reference_year: i32) -> Option<AgeBucket> {
        self.age_at(reference_year).map(AgeBucket::from_age)
    }

    /// Active conditions in canonical column order, deduplicated
    #[must_use]
    pub fn active_conditions(&self) -> SmallVec<[Condition; CONDITION_COUNT]> {
        self.conditions.conditions()
    }

    /// Number of active conditions
    #[must_use]
    pub fn condition_count(&self) -> usize {
        self.conditions.len()
    }

    /// Canonical comma-joined key of the full active-condition set,
    /// empty string for members with no conditions
    #[must_use]
    pub fn exact_set_key(&self) -> String {
        self.conditions.key()
    }
}
