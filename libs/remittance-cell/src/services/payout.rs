use std::sync::Arc;

use chrono::NaiveDate;
use tokio::sync::RwLock;
use tracing::{info, warn};
use uuid::Uuid;

use billing_cell::{Money, RevenueSplitPolicy};
use booking_cell::services::BookingService;

use crate::models::{
    MonthlyDistribution, RemittanceError, RemittanceRecord, RemittanceStatus, RemittanceSummary,
    TransactionReportRow,
};
use crate::services::aggregation::aggregate_remittance;
use crate::services::reporting;

/// Advance a payout exactly one step along `pending -> processing -> paid`.
pub fn advance_remittance_status(
    current: RemittanceStatus,
) -> Result<RemittanceStatus, RemittanceError> {
    match current {
        RemittanceStatus::Pending => Ok(RemittanceStatus::Processing),
        RemittanceStatus::Processing => Ok(RemittanceStatus::Paid),
        RemittanceStatus::Paid => {
            warn!("Attempted to advance a paid remittance");
            Err(RemittanceError::InvalidStatusTransition(RemittanceStatus::Paid))
        }
    }
}

/// Remittance ledger and payout workflow.
///
/// Reads the booking ledger to derive payout records; generated records are
/// immutable snapshots advanced only through their payout states.
pub struct RemittanceService {
    bookings: Arc<BookingService>,
    policy: RevenueSplitPolicy,
    records: RwLock<Vec<RemittanceRecord>>,
}

impl RemittanceService {
    pub fn new(
        bookings: Arc<BookingService>,
        policy: RevenueSplitPolicy,
    ) -> Result<Self, RemittanceError> {
        policy.validate()?;
        Ok(Self {
            bookings,
            policy,
            records: RwLock::new(Vec::new()),
        })
    }

    pub fn policy(&self) -> &RevenueSplitPolicy {
        &self.policy
    }

    /// Derive and store a payout record for one clinic.
    pub async fn generate_for_clinic(
        &self,
        clinic: &str,
        generated_on: NaiveDate,
    ) -> Result<RemittanceRecord, RemittanceError> {
        let bookings = self.bookings.snapshot().await;
        let record = aggregate_remittance(&bookings, clinic, &self.policy, generated_on)?;

        info!(
            "Generated remittance {} for {}: {} bookings, gross {}",
            record.id, record.clinic, record.total_bookings, record.gross_revenue
        );

        self.records.write().await.push(record.clone());
        Ok(record)
    }

    pub async fn list(&self) -> Vec<RemittanceRecord> {
        self.records.read().await.clone()
    }

    pub async fn get(&self, record_id: Uuid) -> Result<RemittanceRecord, RemittanceError> {
        self.records
            .read()
            .await
            .iter()
            .find(|record| record.id == record_id)
            .cloned()
            .ok_or(RemittanceError::NotFound)
    }

    /// Admin "process payout" action: one step forward.
    pub async fn process_payout(
        &self,
        record_id: Uuid,
    ) -> Result<RemittanceRecord, RemittanceError> {
        let mut records = self.records.write().await;

        let record = records
            .iter_mut()
            .find(|record| record.id == record_id)
            .ok_or(RemittanceError::NotFound)?;

        record.status = advance_remittance_status(record.status)?;
        info!("Remittance {} is now {}", record.id, record.status);
        Ok(record.clone())
    }

    /// Totals across the ledger for the admin summary cards.
    pub async fn summary(&self) -> RemittanceSummary {
        let records = self.records.read().await;
        RemittanceSummary {
            total_gross_revenue: records.iter().map(|r| r.gross_revenue).sum::<Money>(),
            total_clinic_share: records.iter().map(|r| r.clinic_share).sum::<Money>(),
            total_platform_fee: records.iter().map(|r| r.platform_fee).sum::<Money>(),
            pending_payouts: records
                .iter()
                .filter(|r| r.status == RemittanceStatus::Pending)
                .count(),
        }
    }

    /// Per-transaction report over the current booking ledger.
    pub async fn transaction_report(&self) -> Result<Vec<TransactionReportRow>, RemittanceError> {
        let bookings = self.bookings.snapshot().await;
        reporting::transaction_report(&bookings, &self.policy)
    }

    /// Monthly clinic/platform revenue distribution over the booking ledger.
    pub async fn monthly_distribution(
        &self,
    ) -> Result<Vec<MonthlyDistribution>, RemittanceError> {
        let bookings = self.bookings.snapshot().await;
        reporting::monthly_distribution(&bookings, &self.policy)
    }
}
