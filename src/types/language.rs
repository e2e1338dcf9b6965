//! Language detection types.

use serde::{Deserialize, Serialize};

/// Document whose language should be detected. Either `text` or `url` is required.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageParams {
    pub url: Option<String>,
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LanguageResponse {
    pub text: String,
    #[serde(rename = "lang")]
    pub language: String,
    pub confidence: f64,
}

impl_text_or_url!(LanguageParams);
