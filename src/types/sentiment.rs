//! Sentiment analysis types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Analysis mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SentimentMode {
    /// Short text such as tweets. The service default.
    Tweet,
    /// Longer bodies of text.
    Document,
}

impl SentimentMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tweet => "tweet",
            Self::Document => "document",
        }
    }
}

impl fmt::Display for SentimentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Document whose sentiment should be analyzed. Either `text` or `url` is required.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SentimentParams {
    pub url: Option<String>,
    pub text: Option<String>,
    pub mode: Option<SentimentMode>,
}

impl SentimentParams {
    pub fn with_mode(mut self, mode: SentimentMode) -> Self {
        self.mode = Some(mode);
        self
    }
}

/// Polarity (positive, negative, neutral) and subjectivity (subjective, objective).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SentimentResponse {
    pub text: String,
    pub polarity: String,
    pub polarity_confidence: f64,
    pub subjectivity: String,
    pub subjectivity_confidence: f64,
}

impl_text_or_url!(SentimentParams);
