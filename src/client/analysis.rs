//! Text analysis façades: concepts, entities, hashtags, language, related
//! phrases, sentiment and summarization.

use super::core::TextApiClient;
use super::validation::{invalid, non_empty, text_or_url};
use crate::transport::FormBody;
use crate::types::{
    ConceptsParams, ConceptsResponse, EntitiesParams, EntitiesResponse, HashtagsParams,
    HashtagsResponse, LanguageParams, LanguageResponse, RelatedParams, RelatedResponse,
    SentimentParams, SentimentResponse, SummarizeParams, SummarizeResponse,
};
use crate::Result;

impl TextApiClient {
    /// Extract concepts mentioned in a document, keyed by concept URI.
    pub async fn concepts(&self, params: &ConceptsParams) -> Result<ConceptsResponse> {
        let mut form = FormBody::new();
        text_or_url(&mut form, "concepts", &params.text, &params.url)?;
        form.add_non_empty("language", non_empty(&params.language));

        self.call("/concepts", &form).await
    }

    /// Extract named entities, grouped by entity type.
    pub async fn entities(&self, params: &EntitiesParams) -> Result<EntitiesResponse> {
        let mut form = FormBody::new();
        text_or_url(&mut form, "entities", &params.text, &params.url)?;

        self.call("/entities", &form).await
    }

    /// Suggest hashtags describing a document.
    pub async fn hashtags(&self, params: &HashtagsParams) -> Result<HashtagsResponse> {
        let mut form = FormBody::new();
        text_or_url(&mut form, "hashtags", &params.text, &params.url)?;
        form.add_non_empty("language", non_empty(&params.language));

        self.call("/hashtags", &form).await
    }

    /// Detect the language a document is written in.
    pub async fn language(&self, params: &LanguageParams) -> Result<LanguageResponse> {
        let mut form = FormBody::new();
        text_or_url(&mut form, "language", &params.text, &params.url)?;

        self.call("/language", &form).await
    }

    /// Phrases semantically related to `phrase`.
    pub async fn related(&self, params: &RelatedParams) -> Result<RelatedResponse> {
        if params.phrase.is_empty() {
            return Err(invalid("related", "phrase", "you must provide a phrase"));
        }
        let mut form = FormBody::new();
        form.add("phrase", params.phrase.as_str());
        form.add_positive("count", params.count);

        self.call("/related", &form).await
    }

    /// Polarity and subjectivity of a document.
    pub async fn sentiment(&self, params: &SentimentParams) -> Result<SentimentResponse> {
        let mut form = FormBody::new();
        text_or_url(&mut form, "sentiment", &params.text, &params.url)?;
        if let Some(mode) = params.mode {
            form.add("mode", mode.as_str());
        }

        self.call("/sentiment", &form).await
    }

    /// Summarize a document given by URL, or by title and text.
    pub async fn summarize(&self, params: &SummarizeParams) -> Result<SummarizeResponse> {
        let mut form = FormBody::new();
        match (
            non_empty(&params.url),
            non_empty(&params.title),
            non_empty(&params.text),
        ) {
            (Some(url), _, _) => {
                form.add("url", url);
            }
            (None, Some(title), Some(text)) => {
                form.add("title", title).add("text", text);
            }
            _ => {
                return Err(invalid(
                    "summarize",
                    "url|title+text",
                    "you must either provide url or a pair of text and title",
                ))
            }
        }
        form.add("mode", params.mode.unwrap_or_default().as_str());
        form.add_positive("sentences_number", params.number_of_sentences);
        form.add_positive("sentences_percentage", params.percentage_of_sentences);

        self.call("/summarize", &form).await
    }
}
