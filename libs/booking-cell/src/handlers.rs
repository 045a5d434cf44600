use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::Utc;
use serde_json::{json, Value};
use uuid::Uuid;

use billing_cell::RevenueSplitService;
use shared_models::error::AppError;

use crate::models::{BookingSearchQuery, CreateBookingRequest};
use crate::services::BookingService;

/// Shared state for the booking routes: the ledger plus the split
/// calculator used to show patients the fee breakdown before payment.
pub struct BookingState {
    pub bookings: Arc<BookingService>,
    pub splitter: Arc<RevenueSplitService>,
}

#[axum::debug_handler]
pub async fn create_booking(
    State(state): State<Arc<BookingState>>,
    Json(request): Json<CreateBookingRequest>,
) -> Result<Json<Value>, AppError> {
    let today = Utc::now().date_naive();
    let booking = state.bookings.create_booking(request, today).await?;

    let fee = booking.consultation_fee;
    let split = state
        .splitter
        .split(fee)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(Json(json!({
        "booking": booking,
        "payment": {
            "consultation_fee": fee,
            "clinic_share": split.clinic_share,
            "platform_fee": split.platform_fee,
        }
    })))
}

#[axum::debug_handler]
pub async fn list_bookings(
    State(state): State<Arc<BookingState>>,
    Query(query): Query<BookingSearchQuery>,
) -> Result<Json<Value>, AppError> {
    let bookings = state.bookings.list(&query).await;

    Ok(Json(json!({
        "bookings": bookings,
        "total": bookings.len()
    })))
}

#[axum::debug_handler]
pub async fn get_booking(
    State(state): State<Arc<BookingState>>,
    Path(booking_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let booking = state.bookings.get(booking_id).await?;
    Ok(Json(json!(booking)))
}

#[axum::debug_handler]
pub async fn get_booking_stats(
    State(state): State<Arc<BookingState>>,
) -> Result<Json<Value>, AppError> {
    let stats = state.bookings.stats().await;
    Ok(Json(json!(stats)))
}

#[axum::debug_handler]
pub async fn approve_booking(
    State(state): State<Arc<BookingState>>,
    Path(booking_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let booking = state.bookings.approve(booking_id).await?;
    Ok(Json(json!(booking)))
}

#[axum::debug_handler]
pub async fn cancel_booking(
    State(state): State<Arc<BookingState>>,
    Path(booking_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let booking = state.bookings.cancel(booking_id).await?;
    Ok(Json(json!(booking)))
}
