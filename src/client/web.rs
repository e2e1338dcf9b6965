//! Web page and image façades.

use super::core::TextApiClient;
use super::validation::{first_present, non_empty};
use crate::transport::FormBody;
use crate::types::{
    ExtractParams, ExtractResponse, ImageTagsParams, ImageTagsResponse, MicroformatsParams,
    MicroformatsResponse,
};
use crate::Result;

const URL_REQUIRED: &str = "you must provide a url";

impl TextApiClient {
    /// Extract the main article (title, body, author, media) from a web page.
    pub async fn extract(&self, params: &ExtractParams) -> Result<ExtractResponse> {
        let mut form = FormBody::new();
        html_or_url(&mut form, &params.html, &params.url)?;
        form.add("best_image", if params.best_image { "true" } else { "false" });

        self.call("/extract", &form).await
    }

    /// Extract hCard microformats from the page at `url`.
    pub async fn microformats(&self, params: &MicroformatsParams) -> Result<MicroformatsResponse> {
        let mut form = FormBody::new();
        first_present(
            &mut form,
            "microformats",
            &[("url", non_empty(&params.url))],
            URL_REQUIRED,
        )?;

        self.call("/microformats", &form).await
    }

    /// Tag the image at `url`.
    pub async fn image_tags(&self, params: &ImageTagsParams) -> Result<ImageTagsResponse> {
        let mut form = FormBody::new();
        first_present(
            &mut form,
            "image_tags",
            &[("url", non_empty(&params.url))],
            URL_REQUIRED,
        )?;

        self.call("/image-tags", &form).await
    }
}

fn html_or_url(form: &mut FormBody, html: &Option<String>, url: &Option<String>) -> Result<()> {
    first_present(
        form,
        "extract",
        &[("html", non_empty(html)), ("url", non_empty(url))],
        "you must either provide url or html",
    )
}
