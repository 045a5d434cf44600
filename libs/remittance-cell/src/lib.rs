pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use models::{
    MonthlyDistribution, RemittanceError, RemittanceRecord, RemittanceStatus, RemittanceSummary,
    TransactionReportRow,
};
pub use services::{
    aggregation::aggregate_remittance,
    payout::{advance_remittance_status, RemittanceService},
    reporting::{monthly_distribution, transaction_report},
};
