//! Combined-call types.
//!
//! The service answers a combined call with a homogeneous list whose entries
//! carry an `endpoint` tag next to an untyped `result`:
//!
//! ```json
//! {"text": "...", "results": [{"endpoint": "sentiment", "result": {...}}]}
//! ```
//!
//! Decoding happens in two passes. The envelope is read with each `result` kept
//! as a generic [`serde_json::Value`], then every value is decoded again into
//! the response type its tag selects. Unknown tags are kept as
//! [`EndpointResult::Unknown`] and otherwise ignored.

use super::de::null_as_default;
use super::{
    ClassifyResponse, ConceptsResponse, EntitiesResponse, ExtractResponse, HashtagsResponse,
    LanguageResponse, SentimentResponse, SummarizeResponse,
};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Endpoints whose results the combined decoder understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CombinedEndpoint {
    Extract,
    Language,
    Entities,
    Concepts,
    Classify,
    Hashtags,
    Sentiment,
    Summarize,
}

impl CombinedEndpoint {
    pub const ALL: [CombinedEndpoint; 8] = [
        Self::Extract,
        Self::Language,
        Self::Entities,
        Self::Concepts,
        Self::Classify,
        Self::Hashtags,
        Self::Sentiment,
        Self::Summarize,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Extract => "extract",
            Self::Language => "language",
            Self::Entities => "entities",
            Self::Concepts => "concepts",
            Self::Classify => "classify",
            Self::Hashtags => "hashtags",
            Self::Sentiment => "sentiment",
            Self::Summarize => "summarize",
        }
    }
}

impl fmt::Display for CombinedEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by [`CombinedEndpoint::from_str`] for tags outside the known set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown combined endpoint: {0}")]
pub struct UnknownEndpoint(pub String);

impl FromStr for CombinedEndpoint {
    type Err = UnknownEndpoint;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|e| e.as_str() == s)
            .ok_or_else(|| UnknownEndpoint(s.to_string()))
    }
}

impl From<CombinedEndpoint> for String {
    fn from(e: CombinedEndpoint) -> Self {
        e.as_str().to_string()
    }
}

/// Document to run through several endpoints at once.
///
/// Either `text` or `url` is required, and at least two endpoints. Endpoints are
/// plain strings so tags the decoder does not know yet can still be requested.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CombinedParams {
    pub url: Option<String>,
    pub text: Option<String>,
    pub endpoints: Vec<String>,
}

impl CombinedParams {
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoints.push(endpoint.into());
        self
    }

    pub fn with_endpoints<I, S>(mut self, endpoints: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.endpoints.extend(endpoints.into_iter().map(Into::into));
        self
    }
}

impl_text_or_url!(CombinedParams);

/// One decoded entry of a combined response.
#[derive(Debug, Clone, PartialEq)]
pub enum EndpointResult {
    Extract(ExtractResponse),
    Language(LanguageResponse),
    Entities(EntitiesResponse),
    Concepts(ConceptsResponse),
    Classify(ClassifyResponse),
    Hashtags(HashtagsResponse),
    Sentiment(SentimentResponse),
    Summarize(SummarizeResponse),
    /// A tag this client does not understand; its payload is dropped.
    Unknown { endpoint: String },
}

impl EndpointResult {
    /// Decode `result` into the response type selected by `endpoint`.
    pub fn decode(endpoint: &str, result: serde_json::Value) -> Result<Self, serde_json::Error> {
        let Ok(kind) = endpoint.parse::<CombinedEndpoint>() else {
            return Ok(Self::Unknown {
                endpoint: endpoint.to_string(),
            });
        };
        Ok(match kind {
            CombinedEndpoint::Extract => Self::Extract(typed(result)?),
            CombinedEndpoint::Language => Self::Language(typed(result)?),
            CombinedEndpoint::Entities => Self::Entities(typed(result)?),
            CombinedEndpoint::Concepts => Self::Concepts(typed(result)?),
            CombinedEndpoint::Classify => Self::Classify(typed(result)?),
            CombinedEndpoint::Hashtags => Self::Hashtags(typed(result)?),
            CombinedEndpoint::Sentiment => Self::Sentiment(typed(result)?),
            CombinedEndpoint::Summarize => Self::Summarize(typed(result)?),
        })
    }

    /// The tag this entry was decoded from.
    pub fn endpoint(&self) -> &str {
        match self {
            Self::Extract(_) => CombinedEndpoint::Extract.as_str(),
            Self::Language(_) => CombinedEndpoint::Language.as_str(),
            Self::Entities(_) => CombinedEndpoint::Entities.as_str(),
            Self::Concepts(_) => CombinedEndpoint::Concepts.as_str(),
            Self::Classify(_) => CombinedEndpoint::Classify.as_str(),
            Self::Hashtags(_) => CombinedEndpoint::Hashtags.as_str(),
            Self::Sentiment(_) => CombinedEndpoint::Sentiment.as_str(),
            Self::Summarize(_) => CombinedEndpoint::Summarize.as_str(),
            Self::Unknown { endpoint } => endpoint,
        }
    }
}

// A `null` result decodes to the empty response rather than failing.
fn typed<T: DeserializeOwned + Default>(value: serde_json::Value) -> Result<T, serde_json::Error> {
    if value.is_null() {
        return Ok(T::default());
    }
    serde_json::from_value(value)
}

#[derive(Deserialize)]
struct RawEndpointResult {
    #[serde(default)]
    endpoint: String,
    #[serde(default)]
    result: serde_json::Value,
}

#[derive(Deserialize)]
struct RawCombinedResponse {
    #[serde(default)]
    text: String,
    #[serde(default, deserialize_with = "null_as_default")]
    results: Vec<RawEndpointResult>,
}

/// Aggregate of a combined call: one field per sub-endpoint, `None` when the
/// service returned nothing for it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(try_from = "RawCombinedResponse")]
pub struct CombinedResponse {
    pub text: String,
    pub article: Option<ExtractResponse>,
    pub summary: Option<SummarizeResponse>,
    pub concepts: Option<ConceptsResponse>,
    pub entities: Option<EntitiesResponse>,
    pub hashtags: Option<HashtagsResponse>,
    pub language: Option<LanguageResponse>,
    pub sentiment: Option<SentimentResponse>,
    pub classifications: Option<ClassifyResponse>,
    /// Every entry in server order, unknown tags included.
    pub results: Vec<EndpointResult>,
}

impl CombinedResponse {
    fn merge(&mut self, result: &EndpointResult) {
        match result {
            EndpointResult::Extract(r) => self.article = Some(r.clone()),
            EndpointResult::Language(r) => self.language = Some(r.clone()),
            EndpointResult::Entities(r) => self.entities = Some(r.clone()),
            EndpointResult::Concepts(r) => self.concepts = Some(r.clone()),
            EndpointResult::Classify(r) => self.classifications = Some(r.clone()),
            EndpointResult::Hashtags(r) => self.hashtags = Some(r.clone()),
            EndpointResult::Sentiment(r) => self.sentiment = Some(r.clone()),
            EndpointResult::Summarize(r) => self.summary = Some(r.clone()),
            EndpointResult::Unknown { .. } => {}
        }
    }
}

impl TryFrom<RawCombinedResponse> for CombinedResponse {
    type Error = serde_json::Error;

    fn try_from(raw: RawCombinedResponse) -> Result<Self, Self::Error> {
        let mut combined = CombinedResponse {
            text: raw.text,
            ..Default::default()
        };
        for entry in raw.results {
            let decoded = EndpointResult::decode(&entry.endpoint, entry.result)?;
            combined.merge(&decoded);
            combined.results.push(decoded);
        }
        Ok(combined)
    }
}
