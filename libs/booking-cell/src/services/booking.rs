use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime, Utc};
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use doctor_cell::services::DoctorDirectoryService;

use crate::models::{
    BookingError, BookingRecord, BookingSearchQuery, BookingStats, BookingStatus,
    CreateBookingRequest,
};
use crate::services::lifecycle::BookingLifecycleService;
use crate::services::search::{booking_stats, filter_bookings};

/// Validate a requested consultation schedule against the calendar and the
/// offered slot grid. Rejects before any record exists.
pub fn validate_schedule(
    date: NaiveDate,
    time: NaiveTime,
    today: NaiveDate,
    offered_slots: &[NaiveTime],
) -> Result<(), BookingError> {
    if date < today {
        return Err(BookingError::SlotUnavailable(format!(
            "date {} is in the past",
            date
        )));
    }
    if !offered_slots.contains(&time) {
        return Err(BookingError::SlotUnavailable(format!(
            "{} is not an offered consultation slot",
            time.format("%H:%M")
        )));
    }
    Ok(())
}

/// Booking store and workflow.
///
/// Holds the booking ledger in insertion order behind an `RwLock`; status
/// transitions re-check the current status under the write lock, so two
/// concurrent approvals cannot both succeed.
pub struct BookingService {
    directory: Arc<DoctorDirectoryService>,
    lifecycle: BookingLifecycleService,
    bookings: RwLock<Vec<BookingRecord>>,
}

impl BookingService {
    pub fn new(directory: Arc<DoctorDirectoryService>) -> Self {
        Self {
            directory,
            lifecycle: BookingLifecycleService::new(),
            bookings: RwLock::new(Vec::new()),
        }
    }

    /// Book a new consultation.
    ///
    /// The fee is copied verbatim from the doctor's directory listing. The
    /// caller supplies `today` so the past-date rule has a single clock.
    pub async fn create_booking(
        &self,
        request: CreateBookingRequest,
        today: NaiveDate,
    ) -> Result<BookingRecord, BookingError> {
        debug!(
            "Booking request for doctor {} on {} at {}",
            request.doctor_id, request.scheduled_date, request.scheduled_time
        );

        if request.patient_name.trim().is_empty() {
            return Err(BookingError::ValidationError(
                "patient name must not be empty".to_string(),
            ));
        }

        let doctor = self
            .directory
            .get(request.doctor_id)
            .map_err(|_| BookingError::DoctorNotFound)?;

        if !doctor.available {
            return Err(BookingError::DoctorUnavailable);
        }

        validate_schedule(
            request.scheduled_date,
            request.scheduled_time,
            today,
            &self.directory.offered_slots(),
        )?;

        let booking = BookingRecord {
            id: Uuid::new_v4(),
            patient_name: request.patient_name,
            doctor_name: doctor.name,
            specialty: doctor.specialty,
            clinic: doctor.clinic,
            scheduled_date: request.scheduled_date,
            scheduled_time: request.scheduled_time,
            consultation_fee: doctor.consultation_fee,
            status: BookingStatus::Pending,
            created_at: Utc::now(),
        };

        info!(
            "Created booking {} with {} ({})",
            booking.id, booking.doctor_name, booking.consultation_fee
        );

        self.bookings.write().await.push(booking.clone());
        Ok(booking)
    }

    pub async fn get(&self, booking_id: Uuid) -> Result<BookingRecord, BookingError> {
        self.bookings
            .read()
            .await
            .iter()
            .find(|booking| booking.id == booking_id)
            .cloned()
            .ok_or(BookingError::NotFound)
    }

    /// Filtered listing in insertion order.
    pub async fn list(&self, query: &BookingSearchQuery) -> Vec<BookingRecord> {
        let bookings = self.bookings.read().await;
        filter_bookings(&bookings, query).cloned().collect()
    }

    pub async fn stats(&self) -> BookingStats {
        booking_stats(&self.bookings.read().await)
    }

    /// Snapshot of the full ledger, for remittance aggregation and reports.
    pub async fn snapshot(&self) -> Vec<BookingRecord> {
        self.bookings.read().await.clone()
    }

    /// Admin approval: `pending -> confirmed`.
    pub async fn approve(&self, booking_id: Uuid) -> Result<BookingRecord, BookingError> {
        self.transition(booking_id, BookingStatus::Confirmed).await
    }

    /// Cancellation (admin or patient initiated): terminal.
    pub async fn cancel(&self, booking_id: Uuid) -> Result<BookingRecord, BookingError> {
        self.transition(booking_id, BookingStatus::Cancelled).await
    }

    async fn transition(
        &self,
        booking_id: Uuid,
        new_status: BookingStatus,
    ) -> Result<BookingRecord, BookingError> {
        let mut bookings = self.bookings.write().await;

        let booking = bookings
            .iter_mut()
            .find(|booking| booking.id == booking_id)
            .ok_or(BookingError::NotFound)?;

        // Checked under the write lock; a concurrent conflicting transition
        // serializes behind us and fails this validation.
        self.lifecycle
            .validate_status_transition(booking.status, new_status)?;

        booking.status = new_status;
        info!("Booking {} is now {}", booking.id, booking.status);
        Ok(booking.clone())
    }
}
