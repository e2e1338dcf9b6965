//! Article extraction types.

use serde::{Deserialize, Serialize};
use super::de::null_as_default;

/// Web page to extract. Either `html` or `url` is required.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractParams {
    pub url: Option<String>,
    /// Raw HTML of the page.
    pub html: Option<String>,
    /// Whether to extract the best image of the article. Always sent.
    pub best_image: bool,
}

impl ExtractParams {
    pub fn url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Default::default()
        }
    }

    pub fn html(html: impl Into<String>) -> Self {
        Self {
            html: Some(html.into()),
            ..Default::default()
        }
    }

    pub fn with_best_image(mut self, best_image: bool) -> Self {
        self.best_image = best_image;
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractResponse {
    pub title: String,
    pub article: String,
    pub image: String,
    pub author: String,
    #[serde(deserialize_with = "null_as_default")]
    pub videos: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub feeds: Vec<String>,
}
