//! Index and document demos: create, index, fetch, and update.

use tracing::error;

use review_search_repository::SearchEngineClient;
use review_search_shared::{
    CreateIndexResponse, IndexResponse, Review, StoredDocument, UpdateResponse,
};

/// Create the index and print the acknowledgment flag.
pub async fn create_index(
    client: &dyn SearchEngineClient,
    index: &str,
) -> Option<CreateIndexResponse> {
    match client.create_index(index).await {
        Ok(created) => {
            println!("CreateIndex succeed! ack:{}", created.acknowledged);
            Some(created)
        }
        Err(e) => {
            error!(error = %e, index = %index, "CreateIndex failed");
            None
        }
    }
}

/// Index a review under its own id and print the engine's response.
pub async fn index_document(
    client: &dyn SearchEngineClient,
    index: &str,
    review: &Review,
) -> Option<IndexResponse> {
    match client.index_document(index, review).await {
        Ok(indexed) => {
            println!(
                "resp: id={} result={} version={}",
                indexed.id, indexed.result, indexed.version
            );
            Some(indexed)
        }
        Err(e) => {
            error!(error = %e, id = review.id, "Index document failed");
            None
        }
    }
}

/// Fetch a document by id and print its stored JSON.
///
/// A missing document takes the same failure path as any other error.
pub async fn get_document_by_id(
    client: &dyn SearchEngineClient,
    index: &str,
    id: &str,
) -> Option<StoredDocument> {
    match client.get_document(index, id).await {
        Ok(document) => {
            println!("resp:{}", document.source);
            Some(document)
        }
        Err(e) => {
            error!(error = %e, id = %id, "Get failed");
            None
        }
    }
}

/// Merge a review into an existing document and print the result.
pub async fn update_document(
    client: &dyn SearchEngineClient,
    index: &str,
    id: &str,
    review: &Review,
) -> Option<UpdateResponse> {
    match client.update_document(index, id, review).await {
        Ok(updated) => {
            println!("result:{}", updated.result);
            Some(updated)
        }
        Err(e) => {
            error!(error = %e, id = %id, "Update document failed");
            None
        }
    }
}

/// Merge a preformatted JSON body into an existing document and print the result.
pub async fn update_document_raw(
    client: &dyn SearchEngineClient,
    index: &str,
    id: &str,
    doc: &str,
) -> Option<UpdateResponse> {
    match client.update_document_raw(index, id, doc).await {
        Ok(updated) => {
            println!("result:{}", updated.result);
            Some(updated)
        }
        Err(e) => {
            error!(error = %e, id = %id, "Update document failed");
            None
        }
    }
}
