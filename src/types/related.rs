//! Related phrase types.

use serde::{Deserialize, Serialize};
use super::de::null_as_default;

/// Phrase to find related phrases for. `phrase` is required.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelatedParams {
    pub phrase: String,
    /// Number of related phrases to return.
    pub count: Option<u32>,
}

impl RelatedParams {
    pub fn phrase(phrase: impl Into<String>) -> Self {
        Self {
            phrase: phrase.into(),
            count: None,
        }
    }

    pub fn with_count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Related {
    pub phrase: String,
    pub distance: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelatedResponse {
    pub phrase: String,
    #[serde(deserialize_with = "null_as_default")]
    pub related: Vec<Related>,
}
