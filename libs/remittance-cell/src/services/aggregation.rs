use chrono::NaiveDate;
use tracing::debug;
use uuid::Uuid;

use billing_cell::{compute_split, Money, RevenueSplitPolicy};
use booking_cell::models::{BookingRecord, BookingStatus};

use crate::models::{RemittanceError, RemittanceRecord, RemittanceStatus};

/// Aggregate one clinic's confirmed bookings into a payout record.
///
/// Only `Confirmed` bookings count: pending revenue is not yet owed and a
/// cancelled booking never contributes. The split is applied once to the
/// aggregated gross revenue rather than per booking, so per-fee truncation
/// cannot drift the totals apart.
pub fn aggregate_remittance(
    records: &[BookingRecord],
    clinic: &str,
    policy: &RevenueSplitPolicy,
    generated_on: NaiveDate,
) -> Result<RemittanceRecord, RemittanceError> {
    let fees: Vec<Money> = records
        .iter()
        .filter(|booking| booking.clinic == clinic)
        .filter(|booking| booking.status == BookingStatus::Confirmed)
        .map(|booking| booking.consultation_fee)
        .collect();

    let gross_revenue: Money = fees.iter().sum();
    let split = compute_split(gross_revenue, policy)?;

    debug!(
        "Aggregated {} confirmed bookings for {}: gross {}",
        fees.len(),
        clinic,
        gross_revenue
    );

    Ok(RemittanceRecord {
        id: Uuid::new_v4(),
        clinic: clinic.to_string(),
        total_bookings: fees.len(),
        gross_revenue,
        clinic_share: split.clinic_share,
        platform_fee: split.platform_fee,
        status: RemittanceStatus::Pending,
        generated_on,
    })
}
