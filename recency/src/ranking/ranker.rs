//! Heuristic recency ranker
//!
//! This module scores loosely-typed records by how recently they were touched
//! and sorts them newest first.

use std::cmp::Ordering;

use serde_json::Value;
use tracing::{debug, trace};

use super::key::{IdKey, RankKey, RecencyTier};
use super::score::{RecencyScore, RecencySource};
use crate::config::{ConfigError, RankingConfig, validation};
use crate::record;
use crate::timestamp::parse_timestamp;

/// Ranks records from most to least recently relevant.
///
/// The ranker holds only its field configuration, so one instance can be shared
/// freely across threads and reused for any number of calls.
#[derive(Debug, Clone)]
pub struct RecencyRanker {
    config: RankingConfig,
    /// Scan suffixes, lowercased once for case-insensitive matching
    suffixes: Vec<String>,
}

impl RecencyRanker {
    /// Create a new ranker with the given configuration
    ///
    /// # Panics
    ///
    /// Panics if the configuration is invalid.
    pub fn new(config: RankingConfig) -> Self {
        match Self::try_new(config) {
            Ok(ranker) => ranker,
            Err(e) => panic!("Invalid ranking config: {}", e),
        }
    }

    /// Create a ranker with the given configuration, returning an error if invalid
    pub fn try_new(config: RankingConfig) -> Result<Self, ConfigError> {
        validation::validate_ranking_config(&config)?;
        let suffixes = config
            .scan_suffixes
            .iter()
            .map(|suffix| suffix.to_lowercase())
            .collect();
        Ok(Self { config, suffixes })
    }

    /// Get reference to the configuration
    pub fn config(&self) -> &RankingConfig {
        &self.config
    }

    /// Work out a record's recency value and the rule that produced it.
    ///
    /// Rules, first match wins:
    /// 1. the first priority field holding a valid timestamp;
    /// 2. the first field, in document order, whose name ends in a scan suffix
    ///    and whose value is a valid timestamp;
    /// 3. the numeric id;
    /// 4. zero.
    pub fn explain(&self, record: &Value) -> RecencyScore {
        for name in &self.config.priority_fields {
            if let Some(millis) = record::field(record, name).and_then(parse_timestamp) {
                return RecencyScore::timestamp(millis, RecencySource::PriorityField(name.clone()));
            }
        }

        for (name, value) in record::fields(record) {
            if !self.is_timestamp_like(name) {
                continue;
            }
            if let Some(millis) = parse_timestamp(value) {
                return RecencyScore::timestamp(millis, RecencySource::ScannedField(name.clone()));
            }
        }

        match record::numeric_id(record, &self.config.id_field) {
            Some(id) => RecencyScore::id(id),
            None => RecencyScore::fallback(),
        }
    }

    /// The primary sort value for a record: epoch milliseconds, the numeric id,
    /// or zero.
    pub fn recency_value(&self, record: &Value) -> f64 {
        self.explain(record).value
    }

    /// Time from the narrow tie-break chain.
    ///
    /// The first field of the chain that is set decides, even when its value
    /// does not parse; later fields are not consulted in that case.
    pub fn narrow_timestamp(&self, record: &Value) -> Option<i64> {
        self.config
            .narrow_fields
            .iter()
            .find_map(|name| record::field(record, name).filter(|v| record::is_truthy(v)))
            .and_then(parse_timestamp)
    }

    /// Build the full sort key for a record.
    pub fn rank_key(&self, record: &Value) -> RankKey {
        self.key_from_score(record, &self.explain(record))
    }

    fn key_from_score(&self, record: &Value, score: &RecencyScore) -> RankKey {
        let id_field = &self.config.id_field;
        let id = match (
            record::numeric_id(record, id_field),
            record::id_text(record, id_field),
        ) {
            // -0 and 0 are the same id
            (Some(value), Some(text)) => IdKey::Numeric {
                value: if value == 0.0 { 0.0 } else { value },
                text,
            },
            (_, Some(text)) => IdKey::Text(text),
            (_, None) => IdKey::Missing,
        };

        let tier = if score.source.is_timestamp() {
            RecencyTier::Dated
        } else if record.is_object() {
            RecencyTier::Undated
        } else {
            RecencyTier::NotARecord
        };

        RankKey {
            tier,
            recency: score.value,
            narrow: self.narrow_timestamp(record),
            id,
        }
    }

    /// Compare two records in ranking order: `Less` means `a` comes first.
    pub fn compare(&self, a: &Value, b: &Value) -> Ordering {
        self.rank_key(a).cmp(&self.rank_key(b))
    }

    /// Return a newly ordered copy of `records`, most recent first.
    ///
    /// The input is left untouched. Records that compare equal keep their
    /// input order.
    pub fn rank(&self, records: &[Value]) -> Vec<Value> {
        self.rank_refs(records).into_iter().cloned().collect()
    }

    /// Like [`rank`](Self::rank), but borrows the records instead of cloning them.
    pub fn rank_refs<'a>(&self, records: &'a [Value]) -> Vec<&'a Value> {
        let mut keyed: Vec<(RankKey, &'a Value)> = Vec::with_capacity(records.len());
        let mut id_fallbacks = 0usize;
        let mut zero_fallbacks = 0usize;

        for record in records {
            let score = self.explain(record);
            match score.source {
                RecencySource::Id => id_fallbacks += 1,
                RecencySource::Fallback => zero_fallbacks += 1,
                _ => {}
            }
            trace!(value = score.value, source = %score.source, "Scored record");
            keyed.push((self.key_from_score(record, &score), record));
        }

        keyed.sort_by(|(a, _), (b, _)| a.cmp(b));

        debug!(
            records = records.len(),
            id_fallbacks, zero_fallbacks, "Ranked records by recency"
        );

        keyed.into_iter().map(|(_, record)| record).collect()
    }

    /// The `limit` most recent records, in ranking order.
    pub fn rank_top(&self, records: &[Value], limit: usize) -> Vec<Value> {
        self.rank_refs(records)
            .into_iter()
            .take(limit)
            .cloned()
            .collect()
    }

    fn is_timestamp_like(&self, name: &str) -> bool {
        let name = name.to_lowercase();
        self.suffixes.iter().any(|suffix| name.ends_with(suffix.as_str()))
    }
}

impl Default for RecencyRanker {
    fn default() -> Self {
        Self::new(RankingConfig::default())
    }
}

/// Rank records with the default field conventions.
///
/// Shorthand for `RecencyRanker::default().rank(records)`.
pub fn rank_by_recency(records: &[Value]) -> Vec<Value> {
    RecencyRanker::default().rank(records)
}
