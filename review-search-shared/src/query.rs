//! Query kinds supported by the demo searches.

/// A search query against a single index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchQuery {
    /// Every document in the index.
    MatchAll,
    /// Documents whose `field` contains `phrase` as a contiguous term sequence.
    MatchPhrase { field: String, phrase: String },
}

impl SearchQuery {
    /// Create a query matching every document.
    pub fn match_all() -> Self {
        Self::MatchAll
    }

    /// Create a phrase query over a single field.
    pub fn match_phrase(field: impl Into<String>, phrase: impl Into<String>) -> Self {
        Self::MatchPhrase {
            field: field.into(),
            phrase: phrase.into(),
        }
    }
}
