use super::form::FormBody;
use crate::credentials::{Credentials, APPLICATION_ID_HEADER, APPLICATION_KEY_HEADER};
use crate::{Error, ErrorContext, Result};
use reqwest::header::{HeaderMap, CONTENT_TYPE, USER_AGENT};
use reqwest::Proxy;
use std::time::Duration;

/// User agent sent with every request.
pub const USER_AGENT_VALUE: &str = concat!("Aylien Text API Rust ", env!("CARGO_PKG_VERSION"));

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// A fully read HTTP response; status is inspected only after the body is in memory.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        self.status < 300
    }

    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Signed form POSTs against `{base_url}{path}`.
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
    credentials: Credentials,
}

impl HttpTransport {
    /// Build the transport.
    ///
    /// No timeout applies unless one is given. A proxy URL that cannot be
    /// parsed fails with a configuration error.
    pub fn new(
        base_url: impl Into<String>,
        credentials: Credentials,
        timeout: Option<Duration>,
        proxy: Option<&str>,
    ) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        if let Some(proxy_url) = proxy {
            let proxy = Proxy::all(proxy_url).map_err(|e| {
                Error::configuration_with_context(
                    format!("invalid proxy URL: {}", e),
                    ErrorContext::new()
                        .with_field_path("proxy")
                        .with_details(proxy_url)
                        .with_source("client_builder"),
                )
            })?;
            builder = builder.proxy(proxy);
        }

        let client = builder
            .build()
            .map_err(|e| Error::configuration(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            credentials,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for `path`; a missing leading slash is added.
    pub fn endpoint_url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Issue a single POST and read the whole body.
    ///
    /// The form content type is only set when the form carries fields;
    /// an empty form is sent as an empty body.
    pub async fn post_form(&self, path: &str, form: &FormBody) -> Result<RawResponse> {
        let url = self.endpoint_url(path);

        let mut req = self
            .client
            .post(&url)
            .header(USER_AGENT, USER_AGENT_VALUE)
            .header(APPLICATION_ID_HEADER, &self.credentials.application_id)
            .header(APPLICATION_KEY_HEADER, &self.credentials.application_key);

        if !form.is_empty() {
            req = req.header(CONTENT_TYPE, FORM_CONTENT_TYPE).body(form.encode());
        }

        let resp = req
            .send()
            .await
            .map_err(|e| Error::Transport(TransportError::Http(e)))?;

        let status = resp.status().as_u16();
        let headers = resp.headers().clone();
        let body = resp
            .bytes()
            .await
            .map_err(|e| Error::Transport(TransportError::Http(e)))?
            .to_vec();

        Ok(RawResponse {
            status,
            headers,
            body,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Transport error: {0}")]
    Other(String),
}
