//! OpenSearch client implementation.
//!
//! This module provides the concrete implementation of `SearchEngineClient`
//! using the OpenSearch Rust client.

use async_trait::async_trait;
use opensearch::{
    cluster::ClusterHealthParts,
    http::response::Response,
    http::transport::{SingleNodeConnectionPool, TransportBuilder},
    indices::IndicesCreateParts,
    GetParts, IndexParts, OpenSearch, SearchParts, UpdateParts,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{value::RawValue, Value};
use tracing::{debug, info, instrument, warn};
use url::Url;

use crate::errors::SearchError;
use crate::interfaces::SearchEngineClient;
use crate::opensearch::index_config::get_index_settings;
use crate::opensearch::queries::{
    average_aggregation_name, build_average_query, build_search_query,
};
use review_search_shared::{
    AverageAggregate, CreateIndexResponse, IndexResponse, Review, SearchHit, SearchQuery,
    SearchResponse, StoredDocument, UpdateResponse,
};

/// Body of a partial update. `doc` is either a typed value or a raw JSON
/// fragment; both are written to the wire the same way.
#[derive(Serialize)]
struct PartialUpdate<'a, T: ?Sized + Serialize> {
    doc: &'a T,
}

/// OpenSearch client implementation.
///
/// # Example
///
/// ```ignore
/// use review_search_repository::opensearch::INDEX_NAME;
/// let client = OpenSearchClient::new("http://localhost:9200")?;
///
/// let review = Review::sample();
/// client.index_document(INDEX_NAME, &review).await?;
/// let stored = client.get_document(INDEX_NAME, &review.document_id()).await?;
/// ```
pub struct OpenSearchClient {
    client: OpenSearch,
}

impl OpenSearchClient {
    /// Create a new OpenSearch client for the specified URL.
    ///
    /// No request is made here; an unreachable server surfaces on first use.
    ///
    /// # Arguments
    ///
    /// * `url` - The OpenSearch server URL (e.g., "http://localhost:9200")
    ///
    /// # Returns
    ///
    /// * `Ok(OpenSearchClient)` - A new client instance
    /// * `Err(SearchError::ConnectionError)` - If the URL is invalid or the transport cannot be built
    pub fn new(url: &str) -> Result<Self, SearchError> {
        let parsed_url = Url::parse(url).map_err(|e| SearchError::connection(e.to_string()))?;

        let conn_pool = SingleNodeConnectionPool::new(parsed_url);
        let transport = TransportBuilder::new(conn_pool)
            .disable_proxy()
            .build()
            .map_err(|e| SearchError::connection(e.to_string()))?;

        let client = OpenSearch::new(transport);

        info!(url = %url, "Created OpenSearch client");

        Ok(Self { client })
    }

    /// Turn a non-success response into the caller's error variant, keeping
    /// the status and body text. Reporting is left to the caller so a bad
    /// status and a transport failure surface the same way.
    async fn ensure_success(
        response: Response,
        operation: &str,
        to_error: fn(String) -> SearchError,
    ) -> Result<Response, SearchError> {
        let status = response.status_code();
        if status.is_success() {
            return Ok(response);
        }

        let error_body = response.text().await.unwrap_or_default();
        debug!(status = %status, body = %error_body, "{} request failed", operation);
        Err(to_error(format!(
            "{} failed with status {}: {}",
            operation, status, error_body
        )))
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, SearchError> {
        response
            .json::<T>()
            .await
            .map_err(|e| SearchError::parse(e.to_string()))
    }

    /// Parse a single hit, skipping ones without an `_id`.
    fn parse_hit(hit: &Value) -> Option<SearchHit> {
        match SearchHit::deserialize(hit) {
            Ok(hit) => Some(hit),
            Err(e) => {
                warn!(error = %e, "Skipping malformed search hit");
                None
            }
        }
    }

    /// Parse the `hits` section of a search response.
    ///
    /// `hits.total` is an object (`{"value": n, "relation": "eq"}`) on current
    /// engines and a bare number on older ones; both are accepted.
    fn parse_search_response(body: &Value) -> Result<SearchResponse, SearchError> {
        let hits = body
            .get("hits")
            .ok_or_else(|| SearchError::parse("Search response has no hits section"))?;

        let total = match hits.get("total") {
            Some(Value::Number(total)) => total.as_u64().unwrap_or(0),
            Some(total) => total.get("value").and_then(Value::as_u64).unwrap_or(0),
            None => 0,
        };

        let hits = hits
            .get("hits")
            .and_then(Value::as_array)
            .map(|hits| hits.iter().filter_map(Self::parse_hit).collect())
            .unwrap_or_default();

        Ok(SearchResponse { total, hits })
    }

    /// Read a named `avg` aggregation out of a search response.
    fn parse_average(body: &Value, name: &str) -> Result<AverageAggregate, SearchError> {
        let aggregation = body
            .get("aggregations")
            .and_then(|aggs| aggs.get(name))
            .ok_or_else(|| {
                SearchError::aggregation(format!("Response has no {} aggregation", name))
            })?;

        AverageAggregate::deserialize(aggregation)
            .map_err(|e| SearchError::parse(format!("Invalid {} aggregation: {}", name, e)))
    }

    async fn send_update<T>(
        &self,
        index: &str,
        id: &str,
        doc: &T,
    ) -> Result<UpdateResponse, SearchError>
    where
        T: ?Sized + Serialize + Sync,
    {
        let response = self
            .client
            .update(UpdateParts::IndexId(index, id))
            .body(PartialUpdate { doc })
            .send()
            .await
            .map_err(|e| SearchError::update(e.to_string()))?;

        let response = Self::ensure_success(response, "Update", SearchError::update).await?;
        let update: UpdateResponse = Self::decode(response).await?;

        debug!(index = %index, id = %id, result = %update.result, "Document updated");
        Ok(update)
    }
}

#[async_trait]
impl SearchEngineClient for OpenSearchClient {
    #[instrument(skip(self))]
    async fn create_index(&self, index: &str) -> Result<CreateIndexResponse, SearchError> {
        let response = self
            .client
            .indices()
            .create(IndicesCreateParts::Index(index))
            .body(get_index_settings())
            .send()
            .await
            .map_err(|e| SearchError::index_creation(e.to_string()))?;

        let response =
            Self::ensure_success(response, "Create index", SearchError::index_creation).await?;
        let created: CreateIndexResponse = Self::decode(response).await?;

        info!(index = %index, acknowledged = created.acknowledged, "Index created");
        Ok(created)
    }

    #[instrument(skip(self, review), fields(id = review.id))]
    async fn index_document(
        &self,
        index: &str,
        review: &Review,
    ) -> Result<IndexResponse, SearchError> {
        let doc_id = review.document_id();

        let response = self
            .client
            .index(IndexParts::IndexId(index, &doc_id))
            .body(review)
            .send()
            .await
            .map_err(|e| SearchError::index(e.to_string()))?;

        let response = Self::ensure_success(response, "Index", SearchError::index).await?;
        let indexed: IndexResponse = Self::decode(response).await?;

        debug!(doc_id = %doc_id, result = %indexed.result, "Document indexed");
        Ok(indexed)
    }

    #[instrument(skip(self))]
    async fn get_document(&self, index: &str, id: &str) -> Result<StoredDocument, SearchError> {
        let response = self
            .client
            .get(GetParts::IndexId(index, id))
            .send()
            .await
            .map_err(|e| SearchError::get(e.to_string()))?;

        let response = Self::ensure_success(response, "Get", SearchError::get).await?;
        Self::decode(response).await
    }

    #[instrument(skip(self))]
    async fn search(
        &self,
        index: &str,
        query: &SearchQuery,
    ) -> Result<SearchResponse, SearchError> {
        let response = self
            .client
            .search(SearchParts::Index(&[index]))
            .body(build_search_query(query))
            .send()
            .await
            .map_err(|e| SearchError::query(e.to_string()))?;

        let response = Self::ensure_success(response, "Search", SearchError::query).await?;
        let body: Value = Self::decode(response).await?;
        let results = Self::parse_search_response(&body)?;

        debug!(total = results.total, returned = results.hits.len(), "Search completed");
        Ok(results)
    }

    #[instrument(skip(self))]
    async fn average(&self, index: &str, field: &str) -> Result<AverageAggregate, SearchError> {
        let response = self
            .client
            .search(SearchParts::Index(&[index]))
            .body(build_average_query(field))
            .send()
            .await
            .map_err(|e| SearchError::aggregation(e.to_string()))?;

        let response =
            Self::ensure_success(response, "Aggregation", SearchError::aggregation).await?;
        let body: Value = Self::decode(response).await?;

        Self::parse_average(&body, &average_aggregation_name(field))
    }

    #[instrument(skip(self, review))]
    async fn update_document(
        &self,
        index: &str,
        id: &str,
        review: &Review,
    ) -> Result<UpdateResponse, SearchError> {
        self.send_update(index, id, review).await
    }

    #[instrument(skip(self, doc))]
    async fn update_document_raw(
        &self,
        index: &str,
        id: &str,
        doc: &str,
    ) -> Result<UpdateResponse, SearchError> {
        let raw = RawValue::from_string(doc.to_string())
            .map_err(|e| SearchError::serialization(format!("Invalid document JSON: {}", e)))?;

        self.send_update(index, id, &*raw).await
    }

    async fn health_check(&self) -> Result<bool, SearchError> {
        let response = self
            .client
            .cluster()
            .health(ClusterHealthParts::None)
            .send()
            .await
            .map_err(|e| SearchError::connection(e.to_string()))?;

        let response =
            Self::ensure_success(response, "Health check", SearchError::connection).await?;
        let health: Value = Self::decode(response).await?;
        let status = health
            .get("status")
            .and_then(Value::as_str)
            .unwrap_or("unknown");

        info!(status = %status, "OpenSearch cluster status");
        Ok(status == "green" || status == "yellow")
    }
}
