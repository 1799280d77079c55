//! Recency scores and where they come from.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The rule that produced a record's recency value.
///
/// Rules are tried in declaration order; the first one that yields a value wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "field", rename_all = "snake_case")]
pub enum RecencySource {
    /// A well-known timestamp field from the priority list
    PriorityField(String),

    /// A timestamp-like field found by scanning the record's keys
    ScannedField(String),

    /// No timestamp found; the numeric identifier stands in
    Id,

    /// Nothing usable; the record scores zero and sorts last
    Fallback,
}

impl RecencySource {
    /// Whether the value is an actual point in time.
    pub fn is_timestamp(&self) -> bool {
        matches!(self, Self::PriorityField(_) | Self::ScannedField(_))
    }

    /// The field that supplied the timestamp, if any.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::PriorityField(name) | Self::ScannedField(name) => Some(name),
            Self::Id | Self::Fallback => None,
        }
    }
}

impl fmt::Display for RecencySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PriorityField(name) => write!(f, "priority field '{}'", name),
            Self::ScannedField(name) => write!(f, "scanned field '{}'", name),
            Self::Id => write!(f, "numeric id"),
            Self::Fallback => write!(f, "none"),
        }
    }
}

/// A record's recency value together with the rule that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecencyScore {
    /// Epoch milliseconds for timestamps, the id itself for the id fallback, else 0
    pub value: f64,

    /// Which rule produced `value`
    pub source: RecencySource,
}

impl RecencyScore {
    pub(crate) fn timestamp(millis: i64, source: RecencySource) -> Self {
        Self {
            value: millis as f64,
            source,
        }
    }

    pub(crate) fn id(id: f64) -> Self {
        Self {
            // Collapse -0.0 so it orders equal to the zero fallback
            value: if id == 0.0 { 0.0 } else { id },
            source: RecencySource::Id,
        }
    }

    pub(crate) fn fallback() -> Self {
        Self {
            value: 0.0,
            source: RecencySource::Fallback,
        }
    }
}
