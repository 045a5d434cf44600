// libs/booking-cell/src/services/lifecycle.rs
use tracing::{debug, info, warn};

use crate::models::{BookingError, BookingStatus};

/// State machine over booking statuses.
///
/// Admin approval confirms a pending booking; cancellation is allowed from
/// both pending and confirmed states and is terminal.
pub struct BookingLifecycleService;

impl BookingLifecycleService {
    pub fn new() -> Self {
        Self
    }

    /// Validate that a status transition is allowed
    pub fn validate_status_transition(
        &self,
        current_status: BookingStatus,
        new_status: BookingStatus,
    ) -> Result<(), BookingError> {
        debug!(
            "Validating status transition from {} to {}",
            current_status, new_status
        );

        let valid_transitions = self.get_valid_transitions(current_status);

        if !valid_transitions.contains(&new_status) {
            warn!(
                "Invalid status transition attempted: {} -> {}",
                current_status, new_status
            );
            return Err(BookingError::InvalidStatusTransition(current_status));
        }

        info!("Status transition validated: {} -> {}", current_status, new_status);
        Ok(())
    }

    /// Get all valid next statuses for a given current status
    pub fn get_valid_transitions(&self, current_status: BookingStatus) -> Vec<BookingStatus> {
        match current_status {
            BookingStatus::Pending => vec![BookingStatus::Confirmed, BookingStatus::Cancelled],
            BookingStatus::Confirmed => vec![BookingStatus::Cancelled],
            // Terminal state - no transitions allowed
            BookingStatus::Cancelled => vec![],
        }
    }

    pub fn is_terminal(&self, status: BookingStatus) -> bool {
        self.get_valid_transitions(status).is_empty()
    }

    /// Whether a booking in this status contributes to remittance revenue.
    pub fn counts_toward_revenue(&self, status: BookingStatus) -> bool {
        status == BookingStatus::Confirmed
    }
}

impl Default for BookingLifecycleService {
    fn default() -> Self {
        Self::new()
    }
}
