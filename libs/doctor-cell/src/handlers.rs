use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde_json::{json, Value};
use uuid::Uuid;

use shared_models::error::AppError;

use crate::models::DoctorSearchFilters;
use crate::services::DoctorDirectoryService;

#[axum::debug_handler]
pub async fn search_doctors(
    State(directory): State<Arc<DoctorDirectoryService>>,
    Query(filters): Query<DoctorSearchFilters>,
) -> Result<Json<Value>, AppError> {
    let doctors = directory.search(&filters);

    Ok(Json(json!({
        "doctors": doctors,
        "total": doctors.len()
    })))
}

#[axum::debug_handler]
pub async fn get_doctor(
    State(directory): State<Arc<DoctorDirectoryService>>,
    Path(doctor_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let doctor = directory
        .get(doctor_id)
        .map_err(|_| AppError::NotFound("Doctor not found".to_string()))?;

    Ok(Json(json!(doctor)))
}

#[axum::debug_handler]
pub async fn get_available_slots(
    State(directory): State<Arc<DoctorDirectoryService>>,
    Path(doctor_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    // Slot grid is shared across the directory, but the practitioner must exist.
    directory
        .get(doctor_id)
        .map_err(|_| AppError::NotFound("Doctor not found".to_string()))?;

    let slots = directory.offered_slots();

    Ok(Json(json!({
        "doctor_id": doctor_id,
        "slots": slots,
    })))
}
