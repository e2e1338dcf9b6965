use super::core::TextApiClient;
use super::validation::{at_least, text_or_url};
use crate::transport::FormBody;
use crate::types::{CombinedParams, CombinedResponse};
use crate::Result;

impl TextApiClient {
    /// Run several endpoints over one document in a single request.
    ///
    /// Sub-results are decoded by their `endpoint` tag; see [`CombinedResponse`].
    pub async fn combined(&self, params: &CombinedParams) -> Result<CombinedResponse> {
        let mut form = FormBody::new();
        text_or_url(&mut form, "combined", &params.text, &params.url)?;
        at_least(
            "combined",
            "endpoints",
            &params.endpoints,
            2,
            "you must provide at least two endpoints",
        )?;
        form.add_all("endpoint", params.endpoints.iter().map(String::as_str));

        self.call("/combined", &form).await
    }
}
