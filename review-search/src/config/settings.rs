//! Runtime settings read from the environment.

use std::env;

use review_search_repository::opensearch::INDEX_NAME;

use crate::AppError;

/// Default OpenSearch URL.
const DEFAULT_OPENSEARCH_URL: &str = "http://localhost:9200";

/// Settings for a demo run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// OpenSearch server URL.
    pub opensearch_url: String,
    /// Index every demo operation targets.
    pub index_name: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            opensearch_url: DEFAULT_OPENSEARCH_URL.to_string(),
            index_name: INDEX_NAME.to_string(),
        }
    }
}

impl Settings {
    /// Load settings from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `OPENSEARCH_URL`: OpenSearch server URL (default: http://localhost:9200)
    /// - `REVIEW_INDEX`: Index name (default: my-review-1)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            opensearch_url: lookup("OPENSEARCH_URL").unwrap_or(defaults.opensearch_url),
            index_name: lookup("REVIEW_INDEX").unwrap_or(defaults.index_name),
        }
    }

    /// Apply values given on the command line over the loaded ones.
    pub fn with_overrides(
        mut self,
        opensearch_url: Option<String>,
        index_name: Option<String>,
    ) -> Self {
        if let Some(url) = opensearch_url {
            self.opensearch_url = url;
        }
        if let Some(index) = index_name {
            self.index_name = index;
        }
        self
    }

    /// Reject settings no request could succeed with.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.opensearch_url.trim().is_empty() {
            return Err(AppError::config("OpenSearch URL is empty"));
        }
        if self.index_name.trim().is_empty() {
            return Err(AppError::config("Index name is empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_match_fixed_literals() {
        let settings = Settings::from_lookup(|_| None);

        assert_eq!(settings.opensearch_url, "http://localhost:9200");
        assert_eq!(settings.index_name, "my-review-1");
    }

    #[test]
    fn test_environment_values() {
        let vars: HashMap<&str, &str> = [
            ("OPENSEARCH_URL", "http://search.internal:9200"),
            ("REVIEW_INDEX", "reviews-staging"),
        ]
        .into_iter()
        .collect();

        let settings = Settings::from_lookup(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(settings.opensearch_url, "http://search.internal:9200");
        assert_eq!(settings.index_name, "reviews-staging");
    }

    #[test]
    fn test_overrides_take_precedence() {
        let settings =
            Settings::default().with_overrides(Some("http://10.0.0.5:9200".to_string()), None);

        assert_eq!(settings.opensearch_url, "http://10.0.0.5:9200");
        assert_eq!(settings.index_name, "my-review-1");
    }

    #[test]
    fn test_validate_rejects_empty_index() {
        let settings = Settings::default().with_overrides(None, Some("  ".to_string()));

        assert!(matches!(settings.validate(), Err(AppError::ConfigError(_))));
        assert!(Settings::default().validate().is_ok());
    }
}
