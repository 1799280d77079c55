//! Precomputed sort keys.
//!
//! Every comparison stage is derived once per record, so sorting compares
//! plain values instead of re-parsing fields. The ordering is lexicographic over
//! the stages, which keeps it a total order even when stages are skipped for
//! some records.

use std::cmp::Ordering;

/// Identifier tie-break value.
///
/// Numeric ids rank before textual ones, textual before missing ones, so that
/// records with mixed id kinds still compare consistently.
#[derive(Debug, Clone, PartialEq)]
pub enum IdKey {
    /// Id that reads as a finite number, with its text for equal numbers
    Numeric { value: f64, text: String },
    /// Any other non-null id, rendered as text
    Text(String),
    /// No id, or a null one
    Missing,
}

impl IdKey {
    fn class(&self) -> u8 {
        match self {
            Self::Numeric { .. } => 0,
            Self::Text(_) => 1,
            Self::Missing => 2,
        }
    }

    /// Ranking order: `Less` means `self` comes first.
    fn rank_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (
                Self::Numeric { value: a, text: a_text },
                Self::Numeric { value: b, text: b_text },
            ) => b.total_cmp(a).then_with(|| locale_cmp(b_text, a_text)),
            (Self::Text(a), Self::Text(b)) => locale_cmp(b, a),
            _ => self.class().cmp(&other.class()),
        }
    }
}

/// What a record's recency value rests on.
///
/// Tiers order before the recency value itself, so a dated record outranks
/// every undated one even when its date lies before the epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RecencyTier {
    /// Value parsed from a date-like field
    Dated,
    /// Object ranked by its numeric id or the zero fallback
    Undated,
    /// Entry that is not an object at all
    NotARecord,
}

/// Compare strings the way a UI collator roughly would: case-insensitively
/// first, exact code points to break the remaining ties.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    folded.then_with(|| a.cmp(b))
}

/// Everything the comparator needs to know about one record.
#[derive(Debug, Clone, PartialEq)]
pub struct RankKey {
    /// Kind of evidence behind the recency value
    pub tier: RecencyTier,
    /// Primary recency value
    pub recency: f64,
    /// Time from the first set field of the narrow chain, when it parses
    pub narrow: Option<i64>,
    /// Identifier tie-break
    pub id: IdKey,
}

impl Eq for RankKey {}

impl Ord for RankKey {
    /// Ranking order: `Less` means `self` is more recent and comes first.
    fn cmp(&self, other: &Self) -> Ordering {
        self.tier
            .cmp(&other.tier)
            .then_with(|| other.recency.total_cmp(&self.recency))
            .then_with(|| match (self.narrow, other.narrow) {
                (Some(a), Some(b)) => b.cmp(&a),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            })
            .then_with(|| self.id.rank_cmp(&other.id))
    }
}

impl PartialOrd for RankKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
