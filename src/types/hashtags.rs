//! Hashtag suggestion types.

use serde::{Deserialize, Serialize};
use super::de::null_as_default;

/// Document to suggest hashtags for. Either `text` or `url` is required.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HashtagsParams {
    pub url: Option<String>,
    pub text: Option<String>,
    pub language: Option<String>,
}

impl HashtagsParams {
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HashtagsResponse {
    pub text: String,
    pub language: String,
    #[serde(deserialize_with = "null_as_default")]
    pub hashtags: Vec<String>,
}

impl_text_or_url!(HashtagsParams);
