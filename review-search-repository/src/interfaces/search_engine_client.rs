//! Search engine client trait definition.
//!
//! This module defines the abstract interface for search engine operations,
//! allowing for different backend implementations (OpenSearch, Elasticsearch, etc.).

use async_trait::async_trait;

use crate::errors::SearchError;
use review_search_shared::{
    AverageAggregate, CreateIndexResponse, IndexResponse, Review, SearchQuery, SearchResponse,
    StoredDocument, UpdateResponse,
};

/// Abstract interface for search engine operations.
///
/// Every method targets the index named by its caller and issues exactly one
/// request. Implementations must be `Send + Sync` so a single handle can be
/// shared by reference across the demo operations.
///
/// # Error Handling
///
/// All methods return `Result<T, SearchError>`. A non-success status from the
/// engine, including a missing document, is reported as the error variant of
/// the operation that issued the request.
#[async_trait]
pub trait SearchEngineClient: Send + Sync {
    /// Create an index. No existence check is made first; conflicts are
    /// reported as returned by the engine.
    ///
    /// # Returns
    ///
    /// * `Ok(CreateIndexResponse)` - The engine's acknowledgment
    /// * `Err(SearchError::IndexCreationError)` - If creation fails
    async fn create_index(&self, index: &str) -> Result<CreateIndexResponse, SearchError>;

    /// Index a review under its document id, replacing any existing document.
    async fn index_document(
        &self,
        index: &str,
        review: &Review,
    ) -> Result<IndexResponse, SearchError>;

    /// Fetch the stored JSON of a document by id.
    ///
    /// # Returns
    ///
    /// * `Ok(StoredDocument)` - The stored document
    /// * `Err(SearchError::GetError)` - If the document is missing or the request fails
    async fn get_document(&self, index: &str, id: &str) -> Result<StoredDocument, SearchError>;

    /// Execute a search query against the index.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let query = SearchQuery::match_phrase("content", "好评");
    /// let response = client.search(INDEX_NAME, &query).await?;
    /// println!("total: {}", response.total);
    /// ```
    async fn search(
        &self,
        index: &str,
        query: &SearchQuery,
    ) -> Result<SearchResponse, SearchError>;

    /// Compute the average of a numeric field across all documents.
    ///
    /// The engine computes the value; no hits are returned.
    async fn average(&self, index: &str, field: &str) -> Result<AverageAggregate, SearchError>;

    /// Partially update a document using a review as the new field set.
    async fn update_document(
        &self,
        index: &str,
        id: &str,
        review: &Review,
    ) -> Result<UpdateResponse, SearchError>;

    /// Partially update a document using a preformatted JSON body.
    ///
    /// The body is sent verbatim as the `doc` of the update. It must be valid
    /// JSON; otherwise a `SerializationError` is returned and no request is sent.
    async fn update_document_raw(
        &self,
        index: &str,
        id: &str,
        doc: &str,
    ) -> Result<UpdateResponse, SearchError>;

    /// Check if the search engine is healthy and reachable.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - If the cluster status is green or yellow
    /// * `Ok(false)` - If the cluster is reachable but red
    /// * `Err(SearchError)` - If the health check fails to execute
    async fn health_check(&self) -> Result<bool, SearchError>;
}
