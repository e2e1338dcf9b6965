//! Mock HTTP server setup for integration tests

use mockito::{Matcher, Mock, Server, ServerGuard};
use textapi::credentials::{APPLICATION_ID_HEADER, APPLICATION_KEY_HEADER};
use textapi::{Credentials, TextApiClient};

pub const APP_ID: &str = "test";
pub const APP_KEY: &str = "test";

/// Install a test subscriber once; honours `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Test fixture that manages a mock server
pub struct MockServerFixture {
    pub server: ServerGuard,
    pub base_url: String,
}

impl MockServerFixture {
    pub async fn new() -> Self {
        init_tracing();
        let server = Server::new_async().await;
        let base_url = server.url();
        Self { server, base_url }
    }

    /// Client with the test credentials, pointed at the mock server.
    pub fn client(&self) -> TextApiClient {
        self.client_with(APP_ID, APP_KEY)
    }

    pub fn client_with(&self, id: &str, key: &str) -> TextApiClient {
        TextApiClient::builder()
            .credentials(Credentials::new(id, key))
            .use_https(false)
            .base_url_override(&self.base_url)
            .build()
            .expect("failed to build client")
    }

    /// Successful JSON reply for an authenticated POST to `path` whose form matches `form`.
    pub async fn mock_json(&mut self, path: &str, form: Matcher, body: &str) -> Mock {
        self.server
            .mock("POST", path)
            .match_header(APPLICATION_ID_HEADER, APP_ID)
            .match_header(APPLICATION_KEY_HEADER, APP_KEY)
            .match_header("content-type", "application/x-www-form-urlencoded")
            .match_body(form)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await
    }

    /// Error reply for a POST to `path` whose form matches `form`.
    pub async fn mock_error(
        &mut self,
        path: &str,
        form: Matcher,
        status: usize,
        body: &str,
    ) -> Mock {
        self.server
            .mock("POST", path)
            .match_body(form)
            .with_status(status)
            .with_body(body)
            .create_async()
            .await
    }

    /// A mock that fails the test if any request reaches the server.
    pub async fn forbid_requests(&mut self) -> Mock {
        self.server
            .mock("POST", Matcher::Any)
            .expect(0)
            .create_async()
            .await
    }
}

/// Form matcher requiring every listed pair.
pub fn form(pairs: &[(&str, &str)]) -> Matcher {
    Matcher::AllOf(
        pairs
            .iter()
            .map(|(k, v)| Matcher::UrlEncoded(k.to_string(), v.to_string()))
            .collect(),
    )
}
