//! Recency ranking
//!
//! This module orders loosely-typed records from most to least recently
//! relevant, despite inconsistent or missing timestamp fields.
//!
//! # Overview
//!
//! Each record gets a primary recency value (see [`RecencyRanker::explain`]).
//! Records whose value came from a date rank ahead of those ranked by id or
//! zero, which rank ahead of non-object entries (see [`RecencyTier`]); within
//! a tier the value descends. Ties are broken, in order, by:
//! - the narrow timestamp chain (`updatedAt`, `createdAt`, `date`, `timestamp`),
//! - numeric ids, descending,
//! - textual ids, descending, compared case-insensitively.
//!
//! Records with a numeric id rank before records with a textual id, and those
//! before records with no id, whenever the earlier stages tie.
//!
//! # Example
//!
//! ```
//! use recency::ranking::RecencyRanker;
//! use serde_json::json;
//!
//! let ranker = RecencyRanker::default();
//! let records = vec![
//!     json!({"id": 5, "name": "Shaft B"}),
//!     json!({"id": 12, "name": "Shaft C"}),
//!     json!({"id": 3, "createdAt": "2024-01-01"}),
//! ];
//!
//! let ranked = ranker.rank(&records);
//! assert_eq!(ranked[0]["id"], 3);
//! assert_eq!(ranked[1]["id"], 12);
//! ```

pub mod key;
pub mod ranker;
pub mod score;

pub use key::{IdKey, RankKey, RecencyTier};
pub use ranker::{RecencyRanker, rank_by_recency};
pub use score::{RecencyScore, RecencySource};
