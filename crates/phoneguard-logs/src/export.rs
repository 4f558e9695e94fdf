//! CSV export encoder for the security log.
//!
//! Encoding is pure; handing the text to a download sink is the caller's
//! concern.

use chrono::{NaiveDate, SecondsFormat};

use phoneguard_core::events::SecurityEvent;

/// Fixed CSV header row.
const HEADER: &str = "Timestamp,Type,Severity,Message,Details";

/// Encode events as CSV text.
///
/// One data row per event; the timestamp is an ISO-8601 instant with
/// millisecond precision, the message is double-quoted, and the details
/// column holds the quoted JSON text of the mapping (`"{}"` when absent).
/// Rows are joined by `\n` with no trailing newline.
// TODO: escape embedded double quotes in the message and details columns.
pub fn to_csv<'a, I>(events: I) -> String
where
    I: IntoIterator<Item = &'a SecurityEvent>,
{
    let mut lines = vec![HEADER.to_string()];
    for event in events {
        let details = event
            .details
            .as_ref()
            .and_then(|map| serde_json::to_string(map).ok())
            .unwrap_or_else(|| "{}".to_string());
        lines.push(format!(
            "{},{},{},\"{}\",\"{}\"",
            event
                .timestamp
                .to_rfc3339_opts(SecondsFormat::Millis, true),
            event.kind.as_str(),
            event.severity.as_str(),
            event.message,
            details,
        ));
    }
    lines.join("\n")
}

/// Suggested filename for an export created on the given date.
pub fn export_filename(date: NaiveDate) -> String {
    format!("security-logs-{}.csv", date.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::EventStore;
    use chrono::{TimeZone, Utc};
    use phoneguard_core::events::{EventKind, Severity};

    #[test]
    fn test_empty_input_yields_header_only() {
        assert_eq!(to_csv([]), HEADER);
    }

    #[test]
    fn test_line_count_is_one_plus_events() {
        let store = EventStore::seed_demo(Utc::now());
        let csv = to_csv(store.iter());
        assert_eq!(csv.lines().count(), 1 + store.len());
        assert!(!csv.ends_with('\n'));
    }

    #[test]
    fn test_row_fields_and_quoting() {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 45).unwrap();
        let event = SecurityEvent::from_parts(
            "9",
            EventKind::DeviceLock,
            Severity::Medium,
            "Device locked remotely",
            now,
            None,
        );
        let csv = to_csv([&event]);
        let row = csv.lines().nth(1).expect("data row");
        assert_eq!(
            row,
            "2024-03-01T12:30:45.000Z,device_lock,medium,\"Device locked remotely\",\"{}\""
        );
    }

    #[test]
    fn test_details_are_encoded_as_json() {
        let store = EventStore::seed_demo(Utc::now());
        let csv = to_csv(store.iter());
        let first_row = csv.lines().nth(1).expect("data row");
        assert!(first_row.contains("\"attempts\":3"));
        assert!(first_row.ends_with('"'));
    }

    #[test]
    fn test_export_filename_uses_iso_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(export_filename(date), "security-logs-2024-03-01.csv");
    }
}
