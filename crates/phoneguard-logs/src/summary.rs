//! Severity summary counts.

use serde::Serialize;

use phoneguard_core::events::{SecurityEvent, Severity};

/// Per-severity event counts for the dashboard summary cards.
///
/// Always computed over the *unfiltered* store: active filters change the
/// displayed list, never the summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeveritySummary {
    /// Number of critical events.
    pub critical: usize,
    /// Number of high-priority events.
    pub high: usize,
    /// Number of medium-priority events.
    pub medium: usize,
    /// Number of low-priority events.
    pub low: usize,
}

impl SeveritySummary {
    /// Count severities over the given events.
    pub fn from_events<'a, I>(events: I) -> Self
    where
        I: IntoIterator<Item = &'a SecurityEvent>,
    {
        let mut summary = Self::default();
        for event in events {
            match event.severity {
                Severity::Critical => summary.critical += 1,
                Severity::High => summary.high += 1,
                Severity::Medium => summary.medium += 1,
                Severity::Low => summary.low += 1,
            }
        }
        summary
    }

    /// Total number of counted events.
    pub fn total(&self) -> usize {
        self.critical + self.high + self.medium + self.low
    }
}
