//! # Review Search
//!
//! Demo program for the review search index.
//!
//! This crate wires the OpenSearch client from configuration and exposes
//! one demo operation per search engine call. Each operation logs its own
//! failure and returns, so a failed step never aborts the ones after it.

pub mod config;
pub mod demos;

pub use config::{Dependencies, Settings};

use thiserror::Error;

/// Errors that can occur while starting the demo.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Search error.
    #[error("Search error: {0}")]
    SearchError(#[from] review_search_repository::SearchError),
}

impl AppError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }
}
