//! # Review Search Repository
//!
//! This crate provides the trait for talking to the search engine along with
//! its error type and a concrete implementation for OpenSearch.

pub mod errors;
pub mod interfaces;
pub mod opensearch;

pub use errors::SearchError;
pub use interfaces::SearchEngineClient;
pub use crate::opensearch::OpenSearchClient;
