use crate::models::{BookingRecord, BookingSearchQuery, BookingStats, BookingStatus};

/// Lazy filter over a booking ledger.
///
/// Preserves the ledger's insertion order and never mutates it; the returned
/// iterator is `Clone`, so callers can restart the scan. No match yields an
/// empty sequence, not an error.
pub fn filter_bookings<'a>(
    records: &'a [BookingRecord],
    query: &BookingSearchQuery,
) -> impl Iterator<Item = &'a BookingRecord> + Clone + 'a {
    let needle = query
        .search
        .as_deref()
        .map(str::to_lowercase)
        .filter(|s| !s.is_empty());
    let status = query.status;
    let from_date = query.from_date;
    let to_date = query.to_date;

    records.iter().filter(move |booking| {
        if let Some(needle) = &needle {
            let matches_text = booking.patient_name.to_lowercase().contains(needle)
                || booking.doctor_name.to_lowercase().contains(needle)
                || booking.id.to_string().to_lowercase().contains(needle);
            if !matches_text {
                return false;
            }
        }
        if let Some(filter) = status {
            if !filter.matches(booking.status) {
                return false;
            }
        }
        if let Some(from) = from_date {
            if booking.scheduled_date < from {
                return false;
            }
        }
        if let Some(to) = to_date {
            if booking.scheduled_date > to {
                return false;
            }
        }
        true
    })
}

/// Counts backing the admin stat cards.
pub fn booking_stats(records: &[BookingRecord]) -> BookingStats {
    BookingStats {
        total: records.len(),
        confirmed: count_status(records, BookingStatus::Confirmed),
        pending: count_status(records, BookingStatus::Pending),
        cancelled: count_status(records, BookingStatus::Cancelled),
    }
}

fn count_status(records: &[BookingRecord], status: BookingStatus) -> usize {
    records
        .iter()
        .filter(|booking| booking.status == status)
        .count()
}
