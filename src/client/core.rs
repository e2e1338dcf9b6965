use crate::client::rate_limits::RateLimits;
use crate::credentials::Credentials;
use crate::transport::{FormBody, HttpTransport, RawResponse};
use crate::{Error, Result};
use arc_swap::ArcSwap;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

/// Host and base path of the public service.
pub const DEFAULT_HOST_AND_PATH: &str = "api.aylien.com/api/v1";

/// Client for the Text API.
///
/// One instance is meant to be shared across calls. Every façade method
/// validates its parameters, sends a single signed POST and decodes the reply.
/// The rate-limit snapshot of the last successful call is kept in the client
/// and can be read with [`TextApiClient::rate_limits`].
pub struct TextApiClient {
    pub(crate) transport: HttpTransport,
    pub(crate) use_https: bool,
    pub(crate) rate_limits: ArcSwap<RateLimits>,
}

/// Error body sent with non-success statuses.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: String,
}

impl TextApiClient {
    /// Create a client for the public service.
    ///
    /// Fails when either credential value is empty.
    pub fn new(credentials: Credentials, use_https: bool) -> Result<Self> {
        Self::builder()
            .credentials(credentials)
            .use_https(use_https)
            .build()
    }

    pub fn builder() -> crate::client::TextApiClientBuilder {
        crate::client::TextApiClientBuilder::new()
    }

    pub fn use_https(&self) -> bool {
        self.use_https
    }

    /// Base URL every endpoint path is appended to.
    pub fn base_url(&self) -> &str {
        self.transport.base_url()
    }

    /// Rate limits reported by the last successful call (all zero before any).
    pub fn rate_limits(&self) -> RateLimits {
        **self.rate_limits.load()
    }

    /// Send `form` to `path` and decode the success body into `T`.
    ///
    /// Statuses >= 300 become [`Error::Remote`] carrying the service's error
    /// message (or the raw body when it is not an error envelope). On success
    /// the rate-limit snapshot is replaced before the body is decoded.
    pub(crate) async fn call<T: DeserializeOwned>(&self, path: &str, form: &FormBody) -> Result<T> {
        let request_id = Uuid::new_v4().to_string();
        let start = std::time::Instant::now();

        debug!(
            request_id = request_id.as_str(),
            endpoint = path,
            fields = form.len(),
            "text api request"
        );

        let resp = self.transport.post_form(path, form).await?;

        if !resp.is_success() {
            let message = remote_message(&resp);
            info!(
                request_id = request_id.as_str(),
                http_status = resp.status,
                endpoint = path,
                duration_ms = start.elapsed().as_millis() as u64,
                "text api request failed"
            );
            return Err(Error::Remote {
                status: resp.status,
                message,
            });
        }

        let limits = RateLimits::from_headers(&resp.headers);
        self.rate_limits.store(Arc::new(limits));

        debug!(
            request_id = request_id.as_str(),
            http_status = resp.status,
            endpoint = path,
            duration_ms = start.elapsed().as_millis() as u64,
            rate_limit = limits.limit,
            rate_limit_remaining = limits.remaining,
            rate_limit_reset = limits.reset,
            "text api request succeeded"
        );

        serde_json::from_slice(&resp.body).map_err(|e| {
            debug!(
                request_id = request_id.as_str(),
                endpoint = path,
                error = %e,
                "text api response did not match the expected shape"
            );
            Error::InvalidResponse {
                status: resp.status,
            }
        })
    }
}

fn remote_message(resp: &RawResponse) -> String {
    match serde_json::from_slice::<ErrorEnvelope>(&resp.body) {
        Ok(envelope) => envelope.error,
        Err(_) => resp.body_text(),
    }
}
