//! # Review Search Shared
//!
//! Types shared between the search repository and the demo binary:
//! the review document model, the supported query kinds, and the decoded
//! responses returned by the search engine.

mod query;
mod response;
mod review;

pub use query::SearchQuery;
pub use response::{
    AverageAggregate, CreateIndexResponse, IndexResponse, SearchHit, SearchResponse,
    StoredDocument, UpdateResponse, WriteResult,
};
pub use review::{Review, Tag};
