//! PhoneGuard — Device Security & Tracking
//!
//! Demo entry point: wires the event log, capture session, and location
//! session against the simulated capability providers and runs one
//! monitoring cycle.

use std::sync::Arc;

use chrono::Utc;
use serde_json::json;
use tracing_subscriber::{EnvFilter, fmt};

use phoneguard_core::config::AppConfig;
use phoneguard_core::error::AppError;
use phoneguard_core::events::{CaptureTrigger, EventKind, Severity};
use phoneguard_core::traits::DownloadSink;
use phoneguard_core::types::{KindFilter, LatLng, SeverityFilter};
use phoneguard_logs::{EventStore, SeveritySummary, export_filename, filter_events, to_csv};
use phoneguard_providers::{FsDownloadSink, SimulatedPositionProvider, SyntheticCamera};
use phoneguard_session::{CaptureSession, DashboardComposer, LocationSession};

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("PhoneGuard error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from file and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("PHONEGUARD_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Run one demo monitoring cycle.
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting PhoneGuard v{}", env!("CARGO_PKG_VERSION"));
    let now = Utc::now();

    // Security log, seeded with the demo dataset.
    let mut store = EventStore::seed_demo(now);
    let summary = SeveritySummary::from_events(store.iter());
    tracing::info!(
        critical = summary.critical,
        high = summary.high,
        medium = summary.medium,
        low = summary.low,
        "security log seeded"
    );

    // One-shot location refresh.
    let position_provider = Arc::new(SimulatedPositionProvider::new(LatLng::new(
        40.7128, -74.0060,
    )));
    let mut location = LocationSession::new(position_provider, config.location.position_options());
    match location.refresh().await {
        Ok(sample) => {
            tracing::info!(position = %sample.coordinates(), accuracy_m = sample.accuracy_m, "position fix acquired");
            store.record(
                EventKind::LocationChange,
                Severity::Low,
                "Device location updated",
                json!({ "lat": sample.lat, "lng": sample.lng })
                    .as_object()
                    .cloned(),
            );
        }
        Err(error) => tracing::warn!(%error, "location refresh failed"),
    }

    // Camera cycle: start, manual capture, simulated alert, stop.
    let camera_provider = Arc::new(SyntheticCamera::new());
    let mut capture = CaptureSession::new(camera_provider, &config.camera);
    capture.start().await?;
    store.record(
        EventKind::CameraActivation,
        Severity::Medium,
        "Security camera activated",
        json!({ "trigger": "manual" }).as_object().cloned(),
    );
    capture.capture(CaptureTrigger::Manual);
    capture.simulate_unauthorized_access();
    tracing::info!(images = capture.image_count(), "capture cycle complete");

    // Export the full log and the newest capture.
    let sink = FsDownloadSink::new("exports");
    let all = filter_events(store.events(), KindFilter::All, SeverityFilter::All);
    let csv = to_csv(all);
    sink.deliver(&export_filename(now.date_naive()), csv.into())
        .await?;
    if let Some(image) = capture.images().first() {
        capture.download_image(&sink, image).await?;
    }
    capture.stop();

    // Dashboard snapshot.
    let status = DashboardComposer::new(true, 85, Some(LatLng::new(40.7128, -74.0060)))
        .compose(&location, now)?;
    tracing::info!(
        online = status.online,
        battery = status.battery_percent,
        last_seen = %status.last_seen_relative(Utc::now()),
        "device status composed"
    );

    Ok(())
}
