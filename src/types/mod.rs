//! # Types Module
//!
//! Request parameters and response shapes for every Text API endpoint.
//!
//! ## Overview
//!
//! Parameters are plain structs built with `Default` plus a few constructors
//! (`ClassifyParams::text("...")`, `SummarizeParams::url("...")`). An empty
//! string is treated exactly like an absent value, and integer options are only
//! sent when positive.
//!
//! Responses mirror the service's JSON. Every response field has a default, so
//! partial bodies still decode.
//!
//! ## Submodules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`classify`] | Classification, taxonomy and unsupervised classification |
//! | [`combined`] | Several endpoints in one call, with tagged sub-results |
//! | [`concepts`] | Concept extraction |
//! | [`entities`] | Entity extraction |
//! | [`extract`] | Article extraction from web pages |
//! | [`hashtags`] | Hashtag suggestion |
//! | [`image_tags`] | Image tagging |
//! | [`language`] | Language detection |
//! | [`microformats`] | hCard microformat extraction |
//! | [`related`] | Related phrases |
//! | [`sentiment`] | Polarity and subjectivity |
//! | [`summarize`] | Summarization |

/// `text(..)` / `url(..)` constructors for parameter structs that accept either.
macro_rules! impl_text_or_url {
    ($($ty:ident),+ $(,)?) => {
        $(
            impl $ty {
                /// Analyze the given text.
                pub fn text(text: impl Into<String>) -> Self {
                    Self {
                        text: Some(text.into()),
                        ..Default::default()
                    }
                }

                /// Analyze the document at the given URL.
                pub fn url(url: impl Into<String>) -> Self {
                    Self {
                        url: Some(url.into()),
                        ..Default::default()
                    }
                }
            }
        )+
    };
}

mod de;

pub mod classify;
pub mod combined;
pub mod concepts;
pub mod entities;
pub mod extract;
pub mod hashtags;
pub mod image_tags;
pub mod language;
pub mod microformats;
pub mod related;
pub mod sentiment;
pub mod summarize;

pub use classify::{
    Category, ClassifyByTaxonomyParams, ClassifyByTaxonomyResponse, ClassifyParams,
    ClassifyResponse, TaxonomyCategory, TaxonomyLink, UnsupervisedClassifyClass,
    UnsupervisedClassifyParams, UnsupervisedClassifyResponse, TAXONOMY_IAB_QAG,
    TAXONOMY_IPTC_SUBJECTCODE,
};
pub use combined::{
    CombinedEndpoint, CombinedParams, CombinedResponse, EndpointResult, UnknownEndpoint,
};
pub use concepts::{Concept, ConceptsParams, ConceptsResponse, SurfaceForm};
pub use entities::{EntitiesParams, EntitiesResponse};
pub use extract::{ExtractParams, ExtractResponse};
pub use hashtags::{HashtagsParams, HashtagsResponse};
pub use image_tags::{ImageTag, ImageTagsParams, ImageTagsResponse};
pub use language::{LanguageParams, LanguageResponse};
pub use microformats::{Address, HCard, Location, MicroformatsParams, MicroformatsResponse, Name};
pub use related::{Related, RelatedParams, RelatedResponse};
pub use sentiment::{SentimentMode, SentimentParams, SentimentResponse};
pub use summarize::{SummarizeMode, SummarizeParams, SummarizeResponse};
