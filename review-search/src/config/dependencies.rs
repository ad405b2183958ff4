//! Dependency initialization and wiring for the demo.

use tracing::info;

use crate::config::Settings;
use crate::AppError;
use review_search_repository::OpenSearchClient;

/// Container for all initialized dependencies.
pub struct Dependencies {
    /// Client shared by every demo operation.
    pub client: OpenSearchClient,
    /// Index every demo operation targets.
    pub index_name: String,
}

impl Dependencies {
    /// Build the search client from settings.
    ///
    /// No request is sent and nothing is retried; a bad address fails here
    /// and an unreachable server fails on the first operation.
    ///
    /// # Returns
    ///
    /// * `Ok(Dependencies)` - Initialized dependencies
    /// * `Err(AppError::ConfigError)` - If the settings are invalid
    /// * `Err(AppError::SearchError)` - If the client cannot be built from the URL
    pub fn new(settings: &Settings) -> Result<Self, AppError> {
        settings.validate()?;

        info!(
            opensearch_url = %settings.opensearch_url,
            index = %settings.index_name,
            "Initializing dependencies"
        );

        let client = OpenSearchClient::new(&settings.opensearch_url)?;

        Ok(Self {
            client,
            index_name: settings.index_name.clone(),
        })
    }
}
