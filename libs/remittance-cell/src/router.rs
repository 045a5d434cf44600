use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;
use crate::services::RemittanceService;

pub fn remittance_routes(service: Arc<RemittanceService>) -> Router {
    Router::new()
        .route("/", get(handlers::list_remittances).post(handlers::generate_remittance))
        .route("/summary", get(handlers::get_summary))
        .route("/{record_id}/process", post(handlers::process_payout))
        .route("/reports/transactions", get(handlers::get_transaction_report))
        .route("/reports/monthly", get(handlers::get_monthly_distribution))
        .with_state(service)
}
