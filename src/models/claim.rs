//! Outpatient claim model
//!
//! Claims are part of the input contract and are loaded into typed records,
//! but the engine never aggregates them: payment totals live on the member
//! record and are credited to the member's whole condition profile.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::models::date_from_yyyymmdd;

/// One row of the outpatient claims file, as stored on disk
#[derive(Debug, Clone, Deserialize)]
pub struct ClaimRow {
    /// Beneficiary the claim belongs to
    #[serde(rename = "DESYNPUF_ID")]
    pub member_id: String,
    /// Claim identifier
    #[serde(rename = "CLM_ID")]
    pub claim_id: Option<u64>,
    /// Claim start date as numeric YYYYMMDD
    #[serde(rename = "CLM_FROM_DT")]
    pub from_date: Option<u32>,
    /// Claim end date as numeric YYYYMMDD
    #[serde(rename = "CLM_THRU_DT")]
    pub thru_date: Option<u32>,
    /// Claim payment amount
    #[serde(rename = "CLM_PMT_AMT")]
    pub payment_amount: Option<f64>,
    /// Primary payer paid amount
    #[serde(rename = "NCH_PRMRY_PYR_CLM_PD_AMT")]
    pub primary_payer_paid: Option<f64>,
}

/// Typed outpatient claim record
#[derive(Debug, Clone)]
pub struct OutpatientClaim {
    /// Beneficiary the claim belongs to
    pub member_id: String,
    /// Claim identifier, when present in the source row
    pub claim_id: Option<u64>,
    /// Claim start date
    pub from_date: Option<NaiveDate>,
    /// Claim end date
    pub thru_date: Option<NaiveDate>,
    /// Claim payment amount, missing as zero
    pub payment_amount: f64,
    /// Primary payer paid amount, missing as zero
    pub primary_payer_paid: f64,
}

impl From<ClaimRow> for OutpatientClaim {
    fn from(row: ClaimRow) -> Self {
        Self {
            member_id: row.member_id,
            claim_id: row.claim_id,
            from_date: row.from_date.and_then(date_from_yyyymmdd),
            thru_date: row.thru_date.and_then(date_from_yyyymmdd),
            payment_amount: row.payment_amount.unwrap_or(0.0),
            primary_payer_paid: row.primary_payer_paid.unwrap_or(0.0),
        }
    }
}
