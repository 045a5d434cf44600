use chrono::{NaiveDate, NaiveTime, Utc};
use rust_decimal_macros::dec;
use uuid::Uuid;

use billing_cell::{Money, RevenueSplitPolicy};
use booking_cell::models::{BookingRecord, BookingStatus};
use remittance_cell::models::RemittanceStatus;
use remittance_cell::services::aggregation::aggregate_remittance;
use remittance_cell::services::payout::advance_remittance_status;
use remittance_cell::services::reporting::{monthly_distribution, transaction_report};

fn booking(
    clinic: &str,
    fee_major: u32,
    date: NaiveDate,
    status: BookingStatus,
) -> BookingRecord {
    BookingRecord {
        id: Uuid::new_v4(),
        patient_name: "John Smith".to_string(),
        doctor_name: "Dr. Sarah Johnson".to_string(),
        specialty: "Cardiologist".to_string(),
        clinic: clinic.to_string(),
        scheduled_date: date,
        scheduled_time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
        consultation_fee: Money::from_major(fee_major),
        status,
        created_at: Utc::now(),
    }
}

fn nov(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 11, day).unwrap()
}

#[test]
fn test_aggregate_sums_confirmed_fees_exactly() {
    let records = vec![
        booking("City Heart Clinic", 45, nov(10), BookingStatus::Confirmed),
        booking("City Heart Clinic", 38, nov(11), BookingStatus::Confirmed),
        booking("City Heart Clinic", 52, nov(12), BookingStatus::Confirmed),
    ];

    let record = aggregate_remittance(
        &records,
        "City Heart Clinic",
        &RevenueSplitPolicy::default(),
        nov(15),
    )
    .unwrap();

    assert_eq!(record.total_bookings, 3);
    assert_eq!(record.gross_revenue.amount(), dec!(135));
    assert_eq!(record.clinic_share.amount(), dec!(128.25));
    assert_eq!(record.platform_fee.amount(), dec!(6.75));
    assert_eq!(
        (record.clinic_share + record.platform_fee).amount(),
        record.gross_revenue.amount()
    );
    assert_eq!(record.status, RemittanceStatus::Pending);
}

#[test]
fn test_aggregate_excludes_pending_cancelled_and_other_clinics() {
    let records = vec![
        booking("City Heart Clinic", 150, nov(10), BookingStatus::Confirmed),
        booking("City Heart Clinic", 150, nov(11), BookingStatus::Pending),
        booking("City Heart Clinic", 150, nov(12), BookingStatus::Cancelled),
        booking("Central Medical Center", 100, nov(12), BookingStatus::Confirmed),
    ];

    let record = aggregate_remittance(
        &records,
        "City Heart Clinic",
        &RevenueSplitPolicy::default(),
        nov(15),
    )
    .unwrap();

    assert_eq!(record.total_bookings, 1);
    assert_eq!(record.gross_revenue.amount(), dec!(150));
}

#[test]
fn test_aggregate_with_no_bookings_is_zero_not_error() {
    let record = aggregate_remittance(
        &[],
        "City Heart Clinic",
        &RevenueSplitPolicy::default(),
        nov(15),
    )
    .unwrap();

    assert_eq!(record.total_bookings, 0);
    assert_eq!(record.gross_revenue, Money::ZERO);
    assert_eq!(record.clinic_share, Money::ZERO);
    assert_eq!(record.platform_fee, Money::ZERO);
}

#[test]
fn test_payout_advances_one_step_at_a_time() {
    let processing = advance_remittance_status(RemittanceStatus::Pending).unwrap();
    assert_eq!(processing, RemittanceStatus::Processing);

    let paid = advance_remittance_status(processing).unwrap();
    assert_eq!(paid, RemittanceStatus::Paid);
}

#[test]
fn test_paid_is_terminal() {
    let result = advance_remittance_status(RemittanceStatus::Paid);
    assert!(result.is_err());
}

#[test]
fn test_transaction_report_covers_confirmed_only() {
    let records = vec![
        booking("City Heart Clinic", 150, nov(10), BookingStatus::Confirmed),
        booking("Central Medical Center", 100, nov(10), BookingStatus::Pending),
    ];

    let rows = transaction_report(&records, &RevenueSplitPolicy::default()).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].amount.amount(), dec!(150));
    assert_eq!(rows[0].clinic_share.amount(), dec!(142.50));
    assert_eq!(rows[0].platform_fee.amount(), dec!(7.50));
}

#[test]
fn test_monthly_distribution_groups_and_orders_by_month() {
    let october = NaiveDate::from_ymd_opt(2025, 10, 20).unwrap();
    let records = vec![
        booking("City Heart Clinic", 150, nov(10), BookingStatus::Confirmed),
        booking("City Heart Clinic", 120, nov(24), BookingStatus::Confirmed),
        booking("Central Medical Center", 100, october, BookingStatus::Confirmed),
        booking("City Heart Clinic", 999, nov(25), BookingStatus::Cancelled),
    ];

    let months = monthly_distribution(&records, &RevenueSplitPolicy::default()).unwrap();
    assert_eq!(months.len(), 2);

    assert_eq!((months[0].year, months[0].month), (2025, 10));
    assert_eq!(months[0].gross_revenue.amount(), dec!(100));

    assert_eq!((months[1].year, months[1].month), (2025, 11));
    assert_eq!(months[1].bookings, 2);
    assert_eq!(months[1].gross_revenue.amount(), dec!(270));
    assert_eq!(
        (months[1].clinic_share + months[1].platform_fee).amount(),
        dec!(270)
    );
}
