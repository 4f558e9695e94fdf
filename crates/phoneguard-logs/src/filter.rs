//! Pure filter engine over the event store.

use phoneguard_core::events::SecurityEvent;
use phoneguard_core::types::{KindFilter, SeverityFilter};

/// Filter events by kind and severity.
///
/// Pure, total, and stable: the output is a subsequence of the input in the
/// original order, and an event is retained iff it passes *both* filters.
/// An empty result is valid for any input.
pub fn filter_events<'a>(
    events: &'a [SecurityEvent],
    kind: KindFilter,
    severity: SeverityFilter,
) -> Vec<&'a SecurityEvent> {
    events
        .iter()
        .filter(|event| kind.matches(event.kind) && severity.matches(event.severity))
        .collect()
}
