//! Interface definitions for the search engine client.
//!
//! This module defines the abstract `SearchEngineClient` trait so the demo
//! operations can run against OpenSearch or a test double.

mod search_engine_client;

pub use search_engine_client::SearchEngineClient;
