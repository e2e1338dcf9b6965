//! Summarization types.

use serde::{Deserialize, Serialize};
use std::fmt;
use super::de::null_as_default;

/// Summarization mode. `Short` produces relatively shorter sentences.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SummarizeMode {
    #[default]
    Default,
    Short,
}

impl SummarizeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Short => "short",
        }
    }
}

impl fmt::Display for SummarizeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Document to summarize. Either `url`, or both `title` and `text`, is required.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SummarizeParams {
    pub url: Option<String>,
    pub text: Option<String>,
    pub title: Option<String>,
    /// Sent as `default` when unset.
    pub mode: Option<SummarizeMode>,
    /// Sentences in the summary. Not applicable to short mode.
    pub number_of_sentences: Option<u32>,
    /// Summary length as a percentage of the document's sentences.
    pub percentage_of_sentences: Option<u32>,
}

impl SummarizeParams {
    pub fn url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Default::default()
        }
    }

    pub fn document(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            text: Some(text.into()),
            ..Default::default()
        }
    }

    pub fn with_mode(mut self, mode: SummarizeMode) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn with_number_of_sentences(mut self, n: u32) -> Self {
        self.number_of_sentences = Some(n);
        self
    }

    pub fn with_percentage_of_sentences(mut self, pct: u32) -> Self {
        self.percentage_of_sentences = Some(pct);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarizeResponse {
    pub text: String,
    #[serde(deserialize_with = "null_as_default")]
    pub sentences: Vec<String>,
}
