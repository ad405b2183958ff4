//! Error types for the review search repository.

mod search_error;

pub use search_error::SearchError;
