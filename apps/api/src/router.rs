use std::sync::Arc;
use std::time::Instant;

use axum::{routing::get, Json, Router};
use chrono::Utc;
use serde_json::{json, Value};

use booking_cell::handlers::BookingState;
use booking_cell::router::booking_routes;
use doctor_cell::router::doctor_routes;
use doctor_cell::services::DoctorDirectoryService;
use remittance_cell::router::remittance_routes;
use remittance_cell::services::RemittanceService;

pub struct ApiState {
    pub directory: Arc<DoctorDirectoryService>,
    pub booking_state: Arc<BookingState>,
    pub remittance: Arc<RemittanceService>,
}

pub fn create_router(state: ApiState) -> Router {
    let started_at = Instant::now();

    Router::new()
        .route("/", get(|| async { "Healthcare Base API is running!" }))
        .route(
            "/health",
            get(move || async move { Json(health_payload(started_at)) }),
        )
        .route("/api", get(|| async { Json(api_index()) }))
        .nest("/api/v1/doctors", doctor_routes(state.directory))
        .nest("/api/v1/bookings", booking_routes(state.booking_state))
        .nest("/api/v1/remittance", remittance_routes(state.remittance))
}

fn health_payload(started_at: Instant) -> Value {
    json!({
        "status": "OK",
        "timestamp": Utc::now().to_rfc3339(),
        "uptime_seconds": started_at.elapsed().as_secs(),
    })
}

fn api_index() -> Value {
    json!({
        "message": "Healthcare Base API",
        "version": "v1",
        "endpoints": {
            "health": "/health",
            "doctors": "/api/v1/doctors",
            "bookings": "/api/v1/bookings",
            "remittance": "/api/v1/remittance",
        }
    })
}
