use std::collections::BTreeMap;

use chrono::Datelike;

use billing_cell::{compute_split, Money, RevenueSplitPolicy};
use booking_cell::models::{BookingRecord, BookingStatus};

use crate::models::{MonthlyDistribution, RemittanceError, TransactionReportRow};

/// One report row per confirmed booking, each with its own fee breakdown.
///
/// Display-level: payouts always re-split the aggregated gross instead of
/// summing these rows.
pub fn transaction_report(
    records: &[BookingRecord],
    policy: &RevenueSplitPolicy,
) -> Result<Vec<TransactionReportRow>, RemittanceError> {
    records
        .iter()
        .filter(|booking| booking.status == BookingStatus::Confirmed)
        .map(|booking| {
            let split = compute_split(booking.consultation_fee, policy)?;
            Ok(TransactionReportRow {
                booking_id: booking.id,
                scheduled_date: booking.scheduled_date,
                patient_name: booking.patient_name.clone(),
                doctor_name: booking.doctor_name.clone(),
                amount: booking.consultation_fee,
                clinic_share: split.clinic_share,
                platform_fee: split.platform_fee,
            })
        })
        .collect()
}

/// Confirmed revenue grouped by calendar month of the consultation date,
/// split as one aggregate per month, in chronological order.
pub fn monthly_distribution(
    records: &[BookingRecord],
    policy: &RevenueSplitPolicy,
) -> Result<Vec<MonthlyDistribution>, RemittanceError> {
    let mut months: BTreeMap<(i32, u32), (usize, Money)> = BTreeMap::new();

    for booking in records
        .iter()
        .filter(|booking| booking.status == BookingStatus::Confirmed)
    {
        let key = (
            booking.scheduled_date.year(),
            booking.scheduled_date.month(),
        );
        let entry = months.entry(key).or_insert((0, Money::ZERO));
        entry.0 += 1;
        entry.1 = entry.1 + booking.consultation_fee;
    }

    months
        .into_iter()
        .map(|((year, month), (bookings, gross_revenue))| {
            let split = compute_split(gross_revenue, policy)?;
            Ok(MonthlyDistribution {
                year,
                month,
                bookings,
                gross_revenue,
                clinic_share: split.clinic_share,
                platform_fee: split.platform_fee,
            })
        })
        .collect()
}
