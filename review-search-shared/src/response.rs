//! Decoded search engine responses.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::Review;

/// Outcome reported by the search engine for a document write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WriteResult {
    Created,
    Updated,
    Deleted,
    NotFound,
    Noop,
}

impl WriteResult {
    /// The wire spelling of this result.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Updated => "updated",
            Self::Deleted => "deleted",
            Self::NotFound => "not_found",
            Self::Noop => "noop",
        }
    }
}

impl fmt::Display for WriteResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Response to an index creation request.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreateIndexResponse {
    pub acknowledged: bool,
    #[serde(default)]
    pub shards_acknowledged: bool,
    #[serde(default)]
    pub index: String,
}

/// Response to a document index or update request.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IndexResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub result: WriteResult,
    #[serde(rename = "_version", default)]
    pub version: i64,
}

/// Updates report the same shape as index writes.
pub type UpdateResponse = IndexResponse;

/// A document fetched by id, with its stored JSON left untouched.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StoredDocument {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_source", default)]
    pub source: Value,
}

impl StoredDocument {
    /// Decode the stored JSON as a review.
    pub fn review(&self) -> Result<Review, serde_json::Error> {
        Review::deserialize(&self.source)
    }
}

/// A single search hit.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchHit {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_score", default)]
    pub score: Option<f64>,
    #[serde(rename = "_source", default)]
    pub source: Value,
}

impl SearchHit {
    /// Decode the hit's stored JSON as a review.
    pub fn review(&self) -> Result<Review, serde_json::Error> {
        Review::deserialize(&self.source)
    }
}

/// Search results in the order the engine ranked them.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResponse {
    /// Total number of matching documents, which may exceed `hits.len()`.
    pub total: u64,
    pub hits: Vec<SearchHit>,
}

/// Result of an `avg` metric aggregation.
///
/// `value` is `None` when no document carried the field.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct AverageAggregate {
    pub value: Option<f64>,
}
