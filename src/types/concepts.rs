//! Concept extraction types.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use super::de::null_as_default;

/// Document whose concepts should be extracted. Either `text` or `url` is required.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConceptsParams {
    pub url: Option<String>,
    pub text: Option<String>,
    pub language: Option<String>,
}

impl ConceptsParams {
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }
}

/// How a concept was written in the document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceForm {
    pub string: String,
    pub score: f64,
    pub offset: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Concept {
    #[serde(rename = "surfaceForms")]
    #[serde(deserialize_with = "null_as_default")]
    pub surface_forms: Vec<SurfaceForm>,
    #[serde(deserialize_with = "null_as_default")]
    pub types: Vec<String>,
    pub support: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConceptsResponse {
    pub text: String,
    pub language: String,
    /// Keyed by concept URI.
    #[serde(deserialize_with = "null_as_default")]
    pub concepts: HashMap<String, Concept>,
}

impl_text_or_url!(ConceptsParams);
