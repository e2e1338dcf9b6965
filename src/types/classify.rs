//! Classification types.

use serde::{Deserialize, Serialize};
use super::de::null_as_default;

/// IAB Quality Assurance Guidelines taxonomy.
pub const TAXONOMY_IAB_QAG: &str = "iab-qag";
/// IPTC subject codes taxonomy.
pub const TAXONOMY_IPTC_SUBJECTCODE: &str = "iptc-subjectcode";

/// Document to classify. Either `text` or `url` is required.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifyParams {
    pub url: Option<String>,
    pub text: Option<String>,
    /// One of en, de, fr, es, it, pt or auto. The service defaults to en.
    pub language: Option<String>,
}

impl ClassifyParams {
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }
}

/// A classification category (IPTC subject code).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Category {
    pub code: String,
    pub label: String,
    pub confidence: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifyResponse {
    pub text: String,
    pub language: String,
    #[serde(deserialize_with = "null_as_default")]
    pub categories: Vec<Category>,
}

/// Document to classify into caller-supplied classes.
///
/// Either `text` or `url` is required, and at least two classes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnsupervisedClassifyParams {
    pub url: Option<String>,
    pub text: Option<String>,
    pub classes: Vec<String>,
    /// Number of concepts used to measure semantic similarity between two words.
    pub number_of_concepts: Option<u32>,
}

impl UnsupervisedClassifyParams {
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn with_classes<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.classes.extend(classes.into_iter().map(Into::into));
        self
    }

    pub fn with_number_of_concepts(mut self, n: u32) -> Self {
        self.number_of_concepts = Some(n);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnsupervisedClassifyClass {
    pub label: String,
    pub score: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnsupervisedClassifyResponse {
    pub text: String,
    #[serde(deserialize_with = "null_as_default")]
    pub classes: Vec<UnsupervisedClassifyClass>,
}

/// Document to classify against a named taxonomy.
///
/// Either `text` or `url` is required, and `taxonomy` must be non-empty.
/// The taxonomy becomes part of the request path (`/classify/{taxonomy}`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifyByTaxonomyParams {
    pub url: Option<String>,
    pub text: Option<String>,
    pub language: Option<String>,
    /// e.g. [`TAXONOMY_IAB_QAG`] or [`TAXONOMY_IPTC_SUBJECTCODE`].
    pub taxonomy: String,
}

impl ClassifyByTaxonomyParams {
    pub fn with_taxonomy(mut self, taxonomy: impl Into<String>) -> Self {
        self.taxonomy = taxonomy.into();
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaxonomyLink {
    pub link: String,
    pub rel: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaxonomyCategory {
    pub id: String,
    pub label: String,
    pub score: f64,
    pub confident: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub links: Vec<TaxonomyLink>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifyByTaxonomyResponse {
    pub text: String,
    pub language: String,
    pub taxonomy: String,
    #[serde(deserialize_with = "null_as_default")]
    pub categories: Vec<TaxonomyCategory>,
}

impl_text_or_url!(ClassifyParams, UnsupervisedClassifyParams, ClassifyByTaxonomyParams);
