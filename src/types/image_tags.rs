//! Image tagging types.

use serde::{Deserialize, Serialize};
use super::de::null_as_default;

/// Image to tag. Only a URL is accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageTagsParams {
    pub url: Option<String>,
}

impl ImageTagsParams {
    pub fn url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageTag {
    pub tag: String,
    pub confidence: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageTagsResponse {
    /// URL of the tagged image.
    #[serde(rename = "string")]
    pub image: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<ImageTag>,
}
