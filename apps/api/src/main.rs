use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::HeaderValue;
use dotenv::dotenv;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::{self, TraceLayer};
use tracing::{info, warn, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod router;

use billing_cell::{RevenueSplitPolicy, RevenueSplitService};
use booking_cell::handlers::BookingState;
use booking_cell::services::BookingService;
use doctor_cell::services::DoctorDirectoryService;
use remittance_cell::services::RemittanceService;
use shared_config::AppConfig;

#[tokio::main]
async fn main() {
    // Loading Env Vars
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Healthcare Base API server");

    // Load configuration
    let config = AppConfig::from_env();

    let policy =
        RevenueSplitPolicy::new(config.clinic_share_percent, config.platform_fee_percent)
            .unwrap_or_else(|e| {
                warn!("Invalid revenue split configuration ({}), using standard 95/5", e);
                RevenueSplitPolicy::default()
            });

    // Build the cell services around the seeded doctor directory
    let directory = Arc::new(DoctorDirectoryService::with_seed_directory());
    let bookings = Arc::new(BookingService::new(directory.clone()));
    let booking_state = Arc::new(BookingState {
        bookings: bookings.clone(),
        splitter: Arc::new(RevenueSplitService::new(policy).unwrap_or_default()),
    });
    let remittance = Arc::new(
        RemittanceService::new(bookings, policy)
            .expect("revenue split policy was validated above"),
    );

    // Set up CORS
    let allow_origin = match config.cors_origin.parse::<HeaderValue>() {
        Ok(origin) if !config.cors_origin.is_empty() => AllowOrigin::exact(origin),
        _ => AllowOrigin::any(),
    };
    let cors = CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the application router
    let app = router::create_router(router::ApiState {
        directory,
        booking_state,
        remittance,
    })
    .layer(
        TraceLayer::new_for_http()
            .make_span_with(trace::DefaultMakeSpan::new().level(Level::INFO))
            .on_response(trace::DefaultOnResponse::new().level(Level::INFO)),
    )
    .layer(cors);

    // Run the server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
