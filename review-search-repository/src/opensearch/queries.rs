//! OpenSearch query builders.
//!
//! This module turns `SearchQuery` values and aggregation requests into
//! OpenSearch request bodies.

use serde_json::{json, Value};

use review_search_shared::SearchQuery;

/// Build an OpenSearch search body from a SearchQuery.
pub fn build_search_query(query: &SearchQuery) -> Value {
    match query {
        SearchQuery::MatchAll => build_match_all_query(),
        SearchQuery::MatchPhrase { field, phrase } => build_match_phrase_query(field, phrase),
    }
}

fn build_match_all_query() -> Value {
    json!({
        "query": {
            "match_all": {}
        }
    })
}

/// Tokenization and proximity rules are left to the field's analyzer.
fn build_match_phrase_query(field: &str, phrase: &str) -> Value {
    json!({
        "query": {
            "match_phrase": {
                field: {
                    "query": phrase
                }
            }
        }
    })
}

/// Name under which the average of `field` is requested and read back.
pub fn average_aggregation_name(field: &str) -> String {
    format!("avg_{}", field)
}

/// Build a zero-hit search body carrying one `avg` aggregation over `field`.
pub fn build_average_query(field: &str) -> Value {
    let mut aggs = serde_json::Map::new();
    aggs.insert(
        average_aggregation_name(field),
        json!({ "avg": { "field": field } }),
    );

    json!({
        "size": 0,
        "aggs": aggs
    })
}
