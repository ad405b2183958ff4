//! In-memory search engine used by the demo tests.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use review_search_repository::{SearchEngineClient, SearchError};
use review_search_shared::{
    AverageAggregate, CreateIndexResponse, IndexResponse, Review, SearchHit, SearchQuery,
    SearchResponse, StoredDocument, UpdateResponse, WriteResult,
};

#[derive(Clone)]
struct Stored {
    source: Value,
    version: i64,
}

type Index = BTreeMap<String, Stored>;

/// Mock search client backed by a map of indices.
///
/// Phrase matching is a plain substring check on string fields, which is
/// enough for the demo data.
pub(crate) struct InMemorySearchClient {
    indices: Mutex<BTreeMap<String, Index>>,
}

impl InMemorySearchClient {
    pub(crate) fn new() -> Self {
        Self {
            indices: Mutex::new(BTreeMap::new()),
        }
    }

    pub(crate) fn stored(&self, index: &str, id: &str) -> Option<Value> {
        let indices = self.indices.lock().unwrap();
        indices
            .get(index)
            .and_then(|docs| docs.get(id))
            .map(|doc| doc.source.clone())
    }

    fn merge(&self, index: &str, id: &str, doc: Value) -> Result<UpdateResponse, SearchError> {
        let mut indices = self.indices.lock().unwrap();
        let stored = indices
            .get_mut(index)
            .and_then(|docs| docs.get_mut(id))
            .ok_or_else(|| {
                SearchError::update(format!("Update failed with status 404 Not Found: {}", id))
            })?;

        let Value::Object(fields) = doc else {
            return Err(SearchError::update("Update failed with status 400 Bad Request"));
        };

        let mut merged = stored.source.clone();
        if let Value::Object(target) = &mut merged {
            for (key, value) in fields {
                target.insert(key, value);
            }
        }

        let result = if merged == stored.source {
            WriteResult::Noop
        } else {
            stored.source = merged;
            stored.version += 1;
            WriteResult::Updated
        };

        Ok(UpdateResponse {
            id: id.to_string(),
            result,
            version: stored.version,
        })
    }

    fn matches(source: &Value, query: &SearchQuery) -> bool {
        match query {
            SearchQuery::MatchAll => true,
            SearchQuery::MatchPhrase { field, phrase } => source
                .get(field)
                .and_then(Value::as_str)
                .is_some_and(|text| text.contains(phrase.as_str())),
        }
    }
}

#[async_trait]
impl SearchEngineClient for InMemorySearchClient {
    async fn create_index(&self, index: &str) -> Result<CreateIndexResponse, SearchError> {
        let mut indices = self.indices.lock().unwrap();
        if indices.contains_key(index) {
            return Err(SearchError::index_creation(format!(
                "Create index failed with status 400 Bad Request: resource_already_exists_exception [{}]",
                index
            )));
        }
        indices.insert(index.to_string(), Index::new());

        Ok(CreateIndexResponse {
            acknowledged: true,
            shards_acknowledged: true,
            index: index.to_string(),
        })
    }

    async fn index_document(
        &self,
        index: &str,
        review: &Review,
    ) -> Result<IndexResponse, SearchError> {
        let source =
            serde_json::to_value(review).map_err(|e| SearchError::serialization(e.to_string()))?;
        let id = review.document_id();

        let mut indices = self.indices.lock().unwrap();
        let docs = indices.entry(index.to_string()).or_default();
        let version = docs.get(&id).map_or(1, |doc| doc.version + 1);
        let result = if version == 1 {
            WriteResult::Created
        } else {
            WriteResult::Updated
        };
        docs.insert(id.clone(), Stored { source, version });

        Ok(IndexResponse {
            id,
            result,
            version,
        })
    }

    async fn get_document(&self, index: &str, id: &str) -> Result<StoredDocument, SearchError> {
        self.stored(index, id)
            .map(|source| StoredDocument {
                id: id.to_string(),
                source,
            })
            .ok_or_else(|| {
                SearchError::get(format!("Get failed with status 404 Not Found: {}", id))
            })
    }

    async fn search(
        &self,
        index: &str,
        query: &SearchQuery,
    ) -> Result<SearchResponse, SearchError> {
        let indices = self.indices.lock().unwrap();
        let docs = indices
            .get(index)
            .ok_or_else(|| SearchError::query("Search failed with status 404 Not Found"))?;

        let hits: Vec<SearchHit> = docs
            .iter()
            .filter(|(_, doc)| Self::matches(&doc.source, query))
            .map(|(id, doc)| SearchHit {
                id: id.clone(),
                score: Some(1.0),
                source: doc.source.clone(),
            })
            .collect();

        Ok(SearchResponse {
            total: hits.len() as u64,
            hits,
        })
    }

    async fn average(&self, index: &str, field: &str) -> Result<AverageAggregate, SearchError> {
        let indices = self.indices.lock().unwrap();
        let docs = indices
            .get(index)
            .ok_or_else(|| {
                SearchError::aggregation("Aggregation failed with status 404 Not Found")
            })?;

        let values: Vec<f64> = docs
            .values()
            .filter_map(|doc| doc.source.get(field).and_then(Value::as_f64))
            .collect();

        let value = if values.is_empty() {
            None
        } else {
            Some(values.iter().sum::<f64>() / values.len() as f64)
        };

        Ok(AverageAggregate { value })
    }

    async fn update_document(
        &self,
        index: &str,
        id: &str,
        review: &Review,
    ) -> Result<UpdateResponse, SearchError> {
        let doc =
            serde_json::to_value(review).map_err(|e| SearchError::serialization(e.to_string()))?;
        self.merge(index, id, doc)
    }

    async fn update_document_raw(
        &self,
        index: &str,
        id: &str,
        doc: &str,
    ) -> Result<UpdateResponse, SearchError> {
        let doc: Value =
            serde_json::from_str(doc).map_err(|e| SearchError::serialization(e.to_string()))?;
        self.merge(index, id, doc)
    }

    async fn health_check(&self) -> Result<bool, SearchError> {
        Ok(true)
    }
}
