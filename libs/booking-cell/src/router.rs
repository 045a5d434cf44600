use std::sync::Arc;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::handlers::{self, BookingState};

pub fn booking_routes(state: Arc<BookingState>) -> Router {
    Router::new()
        .route("/", post(handlers::create_booking).get(handlers::list_bookings))
        .route("/stats", get(handlers::get_booking_stats))
        .route("/{booking_id}", get(handlers::get_booking))
        .route("/{booking_id}/approve", patch(handlers::approve_booking))
        .route("/{booking_id}/cancel", patch(handlers::cancel_booking))
        .with_state(state)
}
