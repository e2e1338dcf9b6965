use crate::client::core::{TextApiClient, DEFAULT_HOST_AND_PATH};
use crate::client::rate_limits::RateLimits;
use crate::credentials::Credentials;
use crate::transport::HttpTransport;
use crate::Result;
use arc_swap::ArcSwap;
use std::time::Duration;

/// Builder for creating clients with custom configuration.
///
/// Keep this surface area small and predictable (developer-friendly).
pub struct TextApiClientBuilder {
    application_id: String,
    application_key: String,
    use_https: bool,
    timeout: Option<Duration>,
    proxy: Option<String>,
    /// Override base URL (primarily for testing with mock servers)
    base_url_override: Option<String>,
}

impl TextApiClientBuilder {
    pub fn new() -> Self {
        Self {
            application_id: String::new(),
            application_key: String::new(),
            use_https: true,
            timeout: None,
            proxy: None,
            base_url_override: None,
        }
    }

    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.application_id = credentials.application_id;
        self.application_key = credentials.application_key;
        self
    }

    pub fn application_id(mut self, id: impl Into<String>) -> Self {
        self.application_id = id.into();
        self
    }

    pub fn application_key(mut self, key: impl Into<String>) -> Self {
        self.application_key = key.into();
        self
    }

    /// Talk to the service over HTTPS (default) or plain HTTP.
    pub fn use_https(mut self, enable: bool) -> Self {
        self.use_https = enable;
        self
    }

    /// Per-request timeout. Unset by default.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Route every request through `proxy_url`. [`build`](Self::build) fails
    /// when the URL cannot be parsed.
    pub fn proxy(mut self, proxy_url: impl Into<String>) -> Self {
        self.proxy = Some(proxy_url.into());
        self
    }

    /// Override the `{scheme}://api.aylien.com/api/v1` base URL.
    ///
    /// This is primarily for testing with mock servers. The scheme flag is
    /// ignored when an override is set.
    pub fn base_url_override(mut self, base_url: impl Into<String>) -> Self {
        self.base_url_override = Some(base_url.into());
        self
    }

    /// Build the client. Fails when either credential is empty.
    pub fn build(self) -> Result<TextApiClient> {
        let credentials = Credentials::new(self.application_id, self.application_key);
        credentials.validate()?;

        let base_url = self.base_url_override.unwrap_or_else(|| {
            let scheme = if self.use_https { "https" } else { "http" };
            format!("{}://{}", scheme, DEFAULT_HOST_AND_PATH)
        });

        let transport = HttpTransport::new(
            base_url,
            credentials,
            self.timeout,
            self.proxy.as_deref(),
        )?;

        Ok(TextApiClient {
            transport,
            use_https: self.use_https,
            rate_limits: ArcSwap::from_pointee(RateLimits::default()),
        })
    }
}

impl Default for TextApiClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
