//! OpenSearch implementation of the search engine client.
//!
//! This module provides a concrete implementation of `SearchEngineClient`
//! using OpenSearch as the backend.

mod client;
mod index_config;
mod queries;

pub use client::OpenSearchClient;
pub use index_config::{get_index_settings, INDEX_NAME};
pub use queries::{average_aggregation_name, build_average_query, build_search_query};
