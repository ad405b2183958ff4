//! Review document model.

use chrono::{DateTime, FixedOffset, Local};
use serde::{Deserialize, Serialize};

/// A single user review as stored in the search index.
///
/// The `id` doubles as the search-engine document id, so it must stay the
/// same across index and update calls for both to hit the same document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    /// Caller-assigned review identifier.
    pub id: i64,
    /// Author of the review.
    pub user_id: i64,
    /// Rating given by the author.
    pub score: u8,
    /// Free-text review body.
    pub content: String,
    /// Tags in insertion order.
    pub tags: Vec<Tag>,
    /// Moderation status code.
    pub status: i32,
    /// When the review was published, with the author's UTC offset.
    pub publish_time: DateTime<FixedOffset>,
}

/// A tag attached to a review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub code: i32,
    pub title: String,
}

impl Tag {
    pub fn new(code: i32, title: impl Into<String>) -> Self {
        Self {
            code,
            title: title.into(),
        }
    }
}

impl Review {
    /// The search-engine document id for this review.
    pub fn document_id(&self) -> String {
        self.id.to_string()
    }

    /// The review indexed by the demo.
    pub fn sample() -> Self {
        Self {
            id: 1,
            user_id: 1499,
            score: 5,
            content: "这是一个好评!".to_string(),
            tags: vec![
                Tag::new(1000, "好评"),
                Tag::new(1100, "物有所值"),
                Tag::new(9000, "有图"),
            ],
            status: 2,
            publish_time: Local::now().fixed_offset(),
        }
    }

    /// The revised review sent by the typed update demo.
    pub fn sample_revision() -> Self {
        Self {
            id: 1,
            user_id: 147982601,
            score: 5,
            content: "这是一个修改后的好评！".to_string(),
            tags: vec![Tag::new(1000, "好评"), Tag::new(9000, "有图")],
            status: 2,
            publish_time: Local::now().fixed_offset(),
        }
    }
}
