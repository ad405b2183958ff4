//! Search and aggregation demos.

use tracing::error;

use review_search_repository::SearchEngineClient;
use review_search_shared::{AverageAggregate, SearchQuery, SearchResponse};

/// Search every document and print the total followed by each hit.
pub async fn search_all(client: &dyn SearchEngineClient, index: &str) -> Option<SearchResponse> {
    run_search(client, index, &SearchQuery::match_all()).await
}

/// Search documents whose `field` contains `phrase` and print the results.
pub async fn search_phrase(
    client: &dyn SearchEngineClient,
    index: &str,
    field: &str,
    phrase: &str,
) -> Option<SearchResponse> {
    run_search(client, index, &SearchQuery::match_phrase(field, phrase)).await
}

async fn run_search(
    client: &dyn SearchEngineClient,
    index: &str,
    query: &SearchQuery,
) -> Option<SearchResponse> {
    match client.search(index, query).await {
        Ok(results) => {
            println!("total: {}", results.total);
            for hit in &results.hits {
                println!("{}", hit.source);
            }
            Some(results)
        }
        Err(e) => {
            error!(error = %e, query = ?query, "search document failed");
            None
        }
    }
}

/// Ask the engine for the average of `field` and print it.
pub async fn average(
    client: &dyn SearchEngineClient,
    index: &str,
    field: &str,
) -> Option<AverageAggregate> {
    match client.average(index, field).await {
        Ok(aggregate) => {
            match aggregate.value {
                Some(value) => println!("avg {}: {}", field, value),
                None => println!("avg {}: null", field),
            }
            Some(aggregate)
        }
        Err(e) => {
            error!(error = %e, field = %field, "aggregation failed");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demos::documents::index_document;
    use crate::demos::testing::InMemorySearchClient;
    use review_search_shared::Review;

    const INDEX: &str = "my-review-1";

    fn review_with(id: i64, score: u8, content: &str) -> Review {
        Review {
            id,
            score,
            content: content.to_string(),
            ..Review::sample()
        }
    }

    #[tokio::test]
    async fn test_match_all_counts_single_document() {
        let client = InMemorySearchClient::new();
        index_document(&client, INDEX, &Review::sample()).await.unwrap();

        let results = search_all(&client, INDEX).await.unwrap();

        assert_eq!(results.total, 1);
        assert_eq!(results.hits[0].id, "1");
    }

    #[tokio::test]
    async fn test_phrase_present_and_absent() {
        let client = InMemorySearchClient::new();
        index_document(&client, INDEX, &Review::sample()).await.unwrap();
        index_document(&client, INDEX, &review_with(2, 1, "物流太慢了"))
            .await
            .unwrap();

        let found = search_phrase(&client, INDEX, "content", "好评").await.unwrap();
        let missing = search_phrase(&client, INDEX, "content", "差评").await.unwrap();

        assert_eq!(found.total, 1);
        assert_eq!(found.hits[0].review().unwrap().id, 1);
        assert_eq!(missing.total, 0);
        assert!(missing.hits.is_empty());
    }

    #[tokio::test]
    async fn test_average_score() {
        let client = InMemorySearchClient::new();
        index_document(&client, INDEX, &review_with(1, 5, "这是一个好评!"))
            .await
            .unwrap();
        index_document(&client, INDEX, &review_with(2, 3, "还行"))
            .await
            .unwrap();

        let aggregate = average(&client, INDEX, "score").await.unwrap();

        assert_eq!(aggregate.value, Some(4.0));
    }

    #[tokio::test]
    async fn test_average_of_empty_index_is_null() {
        let client = InMemorySearchClient::new();
        client.create_index(INDEX).await.unwrap();

        let aggregate = average(&client, INDEX, "score").await.unwrap();

        assert!(aggregate.value.is_none());
    }

    #[tokio::test]
    async fn test_search_unknown_index_fails() {
        let client = InMemorySearchClient::new();

        assert!(search_all(&client, "missing-index").await.is_none());
        assert!(average(&client, "missing-index", "score").await.is_none());
    }
}
