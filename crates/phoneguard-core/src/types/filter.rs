//! Filter types for the security-event log.

use serde::{Deserialize, Serialize};

use crate::events::{EventKind, Severity};

/// Filter over event kinds: the `All` sentinel or one concrete kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KindFilter {
    /// Retain every kind.
    #[default]
    All,
    /// Retain only the given kind.
    Only(EventKind),
}

impl KindFilter {
    /// Whether an event of the given kind passes this filter.
    pub fn matches(self, kind: EventKind) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => kind == wanted,
        }
    }
}

/// Filter over severities, analogous to [`KindFilter`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeverityFilter {
    /// Retain every severity.
    #[default]
    All,
    /// Retain only the given severity.
    Only(Severity),
}

impl SeverityFilter {
    /// Whether an event of the given severity passes this filter.
    pub fn matches(self, severity: Severity) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => severity == wanted,
        }
    }
}
