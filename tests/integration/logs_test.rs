//! End-to-end tests for the security log: seeding, filtering, summary,
//! and CSV export.

use chrono::Utc;

use phoneguard_core::events::{EventKind, Severity};
use phoneguard_core::types::{KindFilter, SeverityFilter};
use phoneguard_logs::{EventStore, SeveritySummary, export_filename, filter_events, to_csv};

use super::helpers::MemorySink;
use phoneguard_core::traits::download::DownloadSink;

#[test]
fn test_critical_filter_returns_exactly_event_one() {
    let store = EventStore::seed_demo(Utc::now());
    let filtered = filter_events(
        store.events(),
        KindFilter::All,
        SeverityFilter::Only(Severity::Critical),
    );
    let ids: Vec<&str> = filtered.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, ["1"]);
}

#[test]
fn test_camera_activation_filter_returns_exactly_event_two() {
    let store = EventStore::seed_demo(Utc::now());
    let filtered = filter_events(
        store.events(),
        KindFilter::Only(EventKind::CameraActivation),
        SeverityFilter::All,
    );
    let ids: Vec<&str> = filtered.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, ["2"]);
}

#[test]
fn test_all_all_returns_the_whole_store() {
    let store = EventStore::seed_demo(Utc::now());
    let filtered = filter_events(store.events(), KindFilter::All, SeverityFilter::All);
    let ids: Vec<&str> = filtered.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, ["1", "2", "3", "4", "5"]);
}

#[test]
fn test_summary_ignores_the_active_filters() {
    let store = EventStore::seed_demo(Utc::now());
    let expected = SeveritySummary::from_events(store.iter());

    let kind_filters = [
        KindFilter::All,
        KindFilter::Only(EventKind::UnauthorizedAccess),
        KindFilter::Only(EventKind::LocationChange),
        KindFilter::Only(EventKind::CameraActivation),
        KindFilter::Only(EventKind::DeviceLock),
        KindFilter::Only(EventKind::LoginAttempt),
    ];
    let severity_filters = [
        SeverityFilter::All,
        SeverityFilter::Only(Severity::Low),
        SeverityFilter::Only(Severity::Medium),
        SeverityFilter::Only(Severity::High),
        SeverityFilter::Only(Severity::Critical),
    ];

    for kind in kind_filters {
        for severity in severity_filters {
            // Filtering narrows the displayed list only; the summary is
            // always computed over the unfiltered store.
            let _displayed = filter_events(store.events(), kind, severity);
            let summary = SeveritySummary::from_events(store.iter());
            assert_eq!(summary, expected, "summary drifted under {kind:?}/{severity:?}");
        }
    }
}

#[test]
fn test_csv_of_empty_store_is_header_only() {
    let store = EventStore::new();
    let csv = to_csv(store.iter());
    assert_eq!(csv, "Timestamp,Type,Severity,Message,Details");
}

#[test]
fn test_csv_line_count_matches_events() {
    let store = EventStore::seed_demo(Utc::now());
    let csv = to_csv(store.iter());
    assert_eq!(csv.lines().count(), 1 + store.len());
}

#[tokio::test]
async fn test_filtered_export_reaches_the_sink() {
    let now = Utc::now();
    let store = EventStore::seed_demo(now);
    let filtered = filter_events(
        store.events(),
        KindFilter::All,
        SeverityFilter::Only(Severity::Medium),
    );
    let csv = to_csv(filtered);

    let sink = MemorySink::new();
    sink.deliver(&export_filename(now.date_naive()), csv.clone().into())
        .await
        .expect("deliver");

    let deliveries = sink.deliveries();
    assert_eq!(deliveries.len(), 1);
    let (filename, payload) = &deliveries[0];
    assert!(filename.starts_with("security-logs-"));
    assert!(filename.ends_with(".csv"));
    assert_eq!(payload, &csv);
    // Header plus the two medium-severity rows.
    assert_eq!(csv.lines().count(), 3);
}
