// libs/doctor-cell/src/models.rs
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use billing_cell::Money;

// ==============================================================================
// CORE DOCTOR MODELS
// ==============================================================================

/// A practitioner listed in the booking directory.
///
/// Fields are denormalized for display: bookings copy name, specialty and
/// clinic verbatim at creation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: Uuid,
    pub name: String,
    pub specialty: String,
    pub clinic: String,
    pub rating: f32,
    pub review_count: i32,
    pub years_experience: i32,
    pub consultation_fee: Money,
    pub available: bool,
}

// ==============================================================================
// REQUEST/RESPONSE MODELS
// ==============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DoctorSearchFilters {
    /// Case-insensitive substring matched against name, specialty and clinic.
    pub q: Option<String>,
    pub available_only: Option<bool>,
}

// ==============================================================================
// ERROR TYPES
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
pub enum DoctorError {
    #[error("Doctor not found")]
    NotFound,
}
