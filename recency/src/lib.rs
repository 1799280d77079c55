//! # Recency
//!
//! Heuristic recency ranking for loosely-typed records, the kind of JSON rows
//! an external REST API hands to a dashboard table: field names drift between
//! `updatedAt`, `created_at`, `date` or nothing at all, values may be malformed,
//! and some entries might not even be objects.
//!
//! ## Quick Start
//!
//! ```rust
//! use recency::prelude::*;
//! use serde_json::json;
//!
//! let records = vec![
//!     json!({"id": 1, "createdAt": "2024-01-01"}),
//!     json!({"id": 2, "updatedAt": "2024-06-01"}),
//!     json!({"id": 3}),
//! ];
//!
//! let ranked = rank_by_recency(&records);
//! let ids: Vec<_> = ranked.iter().map(|r| r["id"].as_i64().unwrap()).collect();
//! assert_eq!(ids, vec![2, 1, 3]);
//! ```
//!
//! ## How a record is scored
//!
//! 1. Well-known timestamp fields, in priority order.
//! 2. Any field whose name looks like a timestamp (`...date`, `...time`, `...at`),
//!    in the record's own key order.
//! 3. The numeric `id`.
//! 4. Zero.
//!
//! Ties are broken by a narrower timestamp chain, then numeric id, then textual id.
//! See [`ranking`] for the full cascade.

pub mod config;
pub mod logging;
pub mod ranking;
pub mod record;
pub mod timestamp;

/// The prelude re-exports commonly used types for convenience
pub mod prelude {
    pub use crate::config::{ConfigBuilder, ConfigLoader, RankingConfig, RecencyConfig};
    pub use crate::ranking::{RecencyRanker, RecencyScore, RecencySource, rank_by_recency};
    pub use crate::timestamp::parse_timestamp;
    pub use crate::{RecencyError, Result};
}

/// Current library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Error type for Recency operations
///
/// Ranking itself never fails; these cover the ambient concerns around it.
#[derive(Debug, thiserror::Error)]
pub enum RecencyError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Logging error
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LogError),

    /// Input document could not be read as records
    #[error("Invalid input: {0}. Provide a JSON array of objects, or NDJSON with --ndjson")]
    Input(String),

    /// IO error while reading input
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Other unclassified errors
    #[error("{0}")]
    Other(String),
}

impl From<crate::config::ConfigError> for RecencyError {
    fn from(err: crate::config::ConfigError) -> Self {
        RecencyError::Configuration(err.to_string())
    }
}

impl From<serde_json::Error> for RecencyError {
    fn from(err: serde_json::Error) -> Self {
        RecencyError::Input(err.to_string())
    }
}

/// Result type for Recency operations
pub type Result<T> = std::result::Result<T, RecencyError>;

/// Build a ranker from the provided configuration, initializing logging first.
///
/// An already-installed subscriber is kept rather than treated as an error, so
/// this is safe to call from tests and from embedding applications. A log
/// file that cannot be created fails with [`RecencyError::Logging`].
///
/// # Examples
///
/// ```rust
/// use recency::prelude::*;
///
/// fn example() -> Result<()> {
///     let config = ConfigBuilder::new()
///         .with_priority_fields(["modifiedOn", "updatedAt"])
///         .build()?;
///
///     let ranker = recency::init(config)?;
///     assert!(ranker.rank(&[]).is_empty());
///     Ok(())
/// }
/// ```
pub fn init(config: config::RecencyConfig) -> Result<ranking::RecencyRanker> {
    logging::init(&config.logging)?;

    let ranker = ranking::RecencyRanker::try_new(config.ranking)?;
    Ok(ranker)
}

/// Build a ranker from configuration discovered on disk and in the environment.
pub fn init_with_defaults() -> Result<ranking::RecencyRanker> {
    let config = config::ConfigLoader::new()
        .load_default_files()
        .load_env()
        .extract()?;
    init(config)
}
