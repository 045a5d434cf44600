// libs/remittance-cell/src/models.rs
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use billing_cell::{BillingError, Money};
use shared_models::error::AppError;

// ==============================================================================
// REMITTANCE MODELS
// ==============================================================================

/// Payout owed to one clinic for a period, derived from its confirmed
/// bookings. Never authored independently: the amounts always come from an
/// aggregation over booking records, and `clinic_share + platform_fee ==
/// gross_revenue` holds exactly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemittanceRecord {
    pub id: Uuid,
    pub clinic: String,
    pub total_bookings: usize,
    pub gross_revenue: Money,
    pub clinic_share: Money,
    pub platform_fee: Money,
    pub status: RemittanceStatus,
    pub generated_on: NaiveDate,
}

/// Payout progress. Strictly linear: the admin "process payout" action
/// advances one step at a time and `Paid` is terminal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RemittanceStatus {
    Pending,
    Processing,
    Paid,
}

impl fmt::Display for RemittanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemittanceStatus::Pending => write!(f, "pending"),
            RemittanceStatus::Processing => write!(f, "processing"),
            RemittanceStatus::Paid => write!(f, "paid"),
        }
    }
}

// ==============================================================================
// SUMMARY AND REPORT MODELS
// ==============================================================================

/// Totals backing the admin remittance summary cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemittanceSummary {
    pub total_gross_revenue: Money,
    pub total_clinic_share: Money,
    pub total_platform_fee: Money,
    pub pending_payouts: usize,
}

/// One row of the admin transaction report: a confirmed booking with its
/// individual fee breakdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionReportRow {
    pub booking_id: Uuid,
    pub scheduled_date: NaiveDate,
    pub patient_name: String,
    pub doctor_name: String,
    pub amount: Money,
    pub clinic_share: Money,
    pub platform_fee: Money,
}

/// One month of the revenue distribution chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyDistribution {
    pub year: i32,
    pub month: u32,
    pub bookings: usize,
    pub gross_revenue: Money,
    pub clinic_share: Money,
    pub platform_fee: Money,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateRemittanceRequest {
    pub clinic: String,
}

// ==============================================================================
// ERROR TYPES
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
pub enum RemittanceError {
    #[error("Remittance record not found")]
    NotFound,

    #[error("Payout cannot advance from terminal status: {0}")]
    InvalidStatusTransition(RemittanceStatus),

    #[error("Billing error: {0}")]
    Billing(#[from] BillingError),
}

impl From<RemittanceError> for AppError {
    fn from(err: RemittanceError) -> Self {
        match err {
            RemittanceError::NotFound => AppError::NotFound(err.to_string()),
            RemittanceError::InvalidStatusTransition(_) => AppError::Conflict(err.to_string()),
            RemittanceError::Billing(_) => AppError::Internal(err.to_string()),
        }
    }
}
