//! Demo operations against the review index.
//!
//! Every operation issues one request through the shared client, prints the
//! result, and returns `Some`. On failure it logs the error and returns
//! `None`; nothing is retried and no failure is propagated further.

mod documents;
mod search;

#[cfg(test)]
pub(crate) mod testing;

pub use documents::{
    create_index, get_document_by_id, index_document, update_document, update_document_raw,
};
pub use search::{average, search_all, search_phrase};

use tracing::{info, warn};

use review_search_repository::SearchEngineClient;
use review_search_shared::Review;

/// Document id the fetch and update demos target.
pub const DEMO_DOCUMENT_ID: &str = "1";

/// Field searched by the phrase demo.
pub const DEMO_PHRASE_FIELD: &str = "content";

/// Phrase searched by the phrase demo ("good review").
pub const DEMO_PHRASE: &str = "好评";

/// Field averaged by the aggregation demo.
pub const DEMO_AVERAGE_FIELD: &str = "score";

/// Body sent by the raw update demo.
pub const RAW_UPDATE_DOCUMENT: &str = r#"{
    "id": 1,
    "userId": 147982601,
    "score": 5,
    "content": "这是一个二次修改后的好评！",
    "tags": [
        {
            "code": 1000,
            "title": "好评"
        },
        {
            "code": 9000,
            "title": "有图"
        }
    ],
    "status": 2,
    "publishTime": "2023-12-10T15:27:18.219385+08:00"
}"#;

/// Run every demo in order and return how many failed.
///
/// Each step is independent: a failure is logged and the next step still runs.
pub async fn run_all(client: &dyn SearchEngineClient, index: &str) -> usize {
    let review = Review::sample();
    let revision = Review::sample_revision();

    let outcomes = [
        ("create-index", create_index(client, index).await.is_some()),
        ("index", index_document(client, index, &review).await.is_some()),
        (
            "get",
            get_document_by_id(client, index, DEMO_DOCUMENT_ID)
                .await
                .is_some(),
        ),
        ("search", search_all(client, index).await.is_some()),
        (
            "search-phrase",
            search_phrase(client, index, DEMO_PHRASE_FIELD, DEMO_PHRASE)
                .await
                .is_some(),
        ),
        (
            "average",
            average(client, index, DEMO_AVERAGE_FIELD).await.is_some(),
        ),
        (
            "update",
            update_document(client, index, DEMO_DOCUMENT_ID, &revision)
                .await
                .is_some(),
        ),
        (
            "update-raw",
            update_document_raw(client, index, DEMO_DOCUMENT_ID, RAW_UPDATE_DOCUMENT)
                .await
                .is_some(),
        ),
    ];

    let failed: Vec<&str> = outcomes
        .iter()
        .filter(|(_, ok)| !ok)
        .map(|(name, _)| *name)
        .collect();

    if failed.is_empty() {
        info!(steps = outcomes.len(), "All demos completed");
    } else {
        warn!(failed = ?failed, steps = outcomes.len(), "Some demos failed");
    }

    failed.len()
}
