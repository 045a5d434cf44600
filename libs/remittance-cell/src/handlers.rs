use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use serde_json::{json, Value};
use uuid::Uuid;

use shared_models::error::AppError;

use crate::models::GenerateRemittanceRequest;
use crate::services::RemittanceService;

#[axum::debug_handler]
pub async fn list_remittances(
    State(service): State<Arc<RemittanceService>>,
) -> Result<Json<Value>, AppError> {
    let records = service.list().await;

    Ok(Json(json!({
        "remittances": records,
        "total": records.len()
    })))
}

#[axum::debug_handler]
pub async fn generate_remittance(
    State(service): State<Arc<RemittanceService>>,
    Json(request): Json<GenerateRemittanceRequest>,
) -> Result<Json<Value>, AppError> {
    let today = Utc::now().date_naive();
    let record = service
        .generate_for_clinic(&request.clinic, today)
        .await?;

    Ok(Json(json!(record)))
}

#[axum::debug_handler]
pub async fn process_payout(
    State(service): State<Arc<RemittanceService>>,
    Path(record_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let record = service.process_payout(record_id).await?;
    Ok(Json(json!(record)))
}

#[axum::debug_handler]
pub async fn get_summary(
    State(service): State<Arc<RemittanceService>>,
) -> Result<Json<Value>, AppError> {
    let summary = service.summary().await;
    Ok(Json(json!(summary)))
}

#[axum::debug_handler]
pub async fn get_transaction_report(
    State(service): State<Arc<RemittanceService>>,
) -> Result<Json<Value>, AppError> {
    let rows = service.transaction_report().await?;

    Ok(Json(json!({
        "transactions": rows,
        "total": rows.len()
    })))
}

#[axum::debug_handler]
pub async fn get_monthly_distribution(
    State(service): State<Arc<RemittanceService>>,
) -> Result<Json<Value>, AppError> {
    let months = service.monthly_distribution().await?;
    Ok(Json(json!({ "months": months })))
}
