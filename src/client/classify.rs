//! Classification façades.

use super::core::TextApiClient;
use super::validation::{at_least, invalid, non_empty, text_or_url};
use crate::transport::FormBody;
use crate::types::{
    ClassifyByTaxonomyParams, ClassifyByTaxonomyResponse, ClassifyParams, ClassifyResponse,
    UnsupervisedClassifyParams, UnsupervisedClassifyResponse,
};
use crate::Result;

impl TextApiClient {
    /// Classify a document into IPTC subject codes.
    pub async fn classify(&self, params: &ClassifyParams) -> Result<ClassifyResponse> {
        let mut form = FormBody::new();
        text_or_url(&mut form, "classify", &params.text, &params.url)?;
        form.add_non_empty("language", non_empty(&params.language));

        self.call("/classify", &form).await
    }

    /// Pick the most semantically relevant of the caller's classes for a document.
    pub async fn unsupervised_classify(
        &self,
        params: &UnsupervisedClassifyParams,
    ) -> Result<UnsupervisedClassifyResponse> {
        let mut form = FormBody::new();
        text_or_url(&mut form, "unsupervised_classify", &params.text, &params.url)?;
        at_least(
            "unsupervised_classify",
            "classes",
            &params.classes,
            2,
            "you must provide at least two classes",
        )?;
        form.add_positive("number_of_concepts", params.number_of_concepts);
        form.add_all("class", params.classes.iter().map(String::as_str));

        self.call("/classify/unsupervised", &form).await
    }

    /// Classify a document against a taxonomy such as `iab-qag`.
    pub async fn classify_by_taxonomy(
        &self,
        params: &ClassifyByTaxonomyParams,
    ) -> Result<ClassifyByTaxonomyResponse> {
        let mut form = FormBody::new();
        text_or_url(&mut form, "classify_by_taxonomy", &params.text, &params.url)?;
        if params.taxonomy.is_empty() {
            return Err(invalid(
                "classify_by_taxonomy",
                "taxonomy",
                "you must specify the taxonomy",
            ));
        }
        form.add_non_empty("language", non_empty(&params.language));

        self.call(&format!("/classify/{}", params.taxonomy), &form)
            .await
    }
}
