//! OpenSearch index configuration and mappings.
//!
//! This module defines the index settings and mappings for the review index.

use serde_json::{json, Value};

/// The name of the review index.
pub const INDEX_NAME: &str = "my-review-1";

/// Get the index settings and mappings for the review index.
///
/// Field names follow the review wire format. `content` is analyzed text so
/// phrase queries work against it; tag titles are keywords for exact filtering.
pub fn get_index_settings() -> Value {
    json!({
        "settings": {
            "number_of_shards": 1,
            "number_of_replicas": 1
        },
        "mappings": {
            "properties": {
                "id": {
                    "type": "long"
                },
                "userId": {
                    "type": "long"
                },
                "score": {
                    "type": "short"
                },
                "content": {
                    "type": "text"
                },
                "tags": {
                    "properties": {
                        "code": {
                            "type": "integer"
                        },
                        "title": {
                            "type": "keyword"
                        }
                    }
                },
                "status": {
                    "type": "integer"
                },
                "publishTime": {
                    "type": "date"
                }
            }
        }
    })
}
