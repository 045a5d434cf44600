// libs/booking-cell/src/models.rs
use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use billing_cell::Money;
use shared_models::error::AppError;

// ==============================================================================
// CORE BOOKING MODELS
// ==============================================================================

/// A scheduled consultation between a patient and a practitioner.
///
/// Doctor fields are denormalized display copies taken from the directory at
/// creation time. Records are never deleted; cancellation is a status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingRecord {
    pub id: Uuid,
    pub patient_name: String,
    pub doctor_name: String,
    pub specialty: String,
    pub clinic: String,
    pub scheduled_date: NaiveDate,
    pub scheduled_time: NaiveTime,
    pub consultation_fee: Money,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookingStatus::Pending => write!(f, "pending"),
            BookingStatus::Confirmed => write!(f, "confirmed"),
            BookingStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

// ==============================================================================
// REQUEST/RESPONSE MODELS
// ==============================================================================

/// Patient-facing booking request. The consultation fee is intentionally
/// absent: it is read from the doctor's directory listing, never from the
/// client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBookingRequest {
    pub patient_name: String,
    pub doctor_id: Uuid,
    pub scheduled_date: NaiveDate,
    pub scheduled_time: NaiveTime,
}

/// Status filter as rendered by the admin select widget; `All` passes
/// everything through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusFilter {
    All,
    Pending,
    Confirmed,
    Cancelled,
}

impl StatusFilter {
    pub fn matches(&self, status: BookingStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Pending => status == BookingStatus::Pending,
            StatusFilter::Confirmed => status == BookingStatus::Confirmed,
            StatusFilter::Cancelled => status == BookingStatus::Cancelled,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookingSearchQuery {
    /// Case-insensitive substring matched against patient name, doctor name
    /// and booking id.
    pub search: Option<String>,
    pub status: Option<StatusFilter>,
    pub from_date: Option<NaiveDate>,
    pub to_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingStats {
    pub total: usize,
    pub confirmed: usize,
    pub pending: usize,
    pub cancelled: usize,
}

// ==============================================================================
// ERROR TYPES
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
pub enum BookingError {
    #[error("Booking not found")]
    NotFound,

    #[error("Requested slot is not available: {0}")]
    SlotUnavailable(String),

    #[error("Booking cannot be modified in current status: {0}")]
    InvalidStatusTransition(BookingStatus),

    #[error("Doctor not found")]
    DoctorNotFound,

    #[error("Doctor is not accepting bookings")]
    DoctorUnavailable,

    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl From<BookingError> for AppError {
    fn from(err: BookingError) -> Self {
        match err {
            BookingError::NotFound | BookingError::DoctorNotFound => {
                AppError::NotFound(err.to_string())
            }
            BookingError::InvalidStatusTransition(_) => AppError::Conflict(err.to_string()),
            BookingError::SlotUnavailable(_) | BookingError::DoctorUnavailable => {
                AppError::BadRequest(err.to_string())
            }
            BookingError::ValidationError(msg) => AppError::ValidationError(msg),
        }
    }
}
