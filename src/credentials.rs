//! Application credentials sent with every request.

use std::fmt;

/// Header carrying the application id.
pub const APPLICATION_ID_HEADER: &str = "X-AYLIEN-TextAPI-Application-ID";
/// Header carrying the application key.
pub const APPLICATION_KEY_HEADER: &str = "X-AYLIEN-TextAPI-Application-Key";

/// The application id / key pair identifying a Text API account.
///
/// Both values are required; [`Credentials::validate`] rejects empty ones.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub application_id: String,
    pub application_key: String,
}

impl Credentials {
    pub fn new(application_id: impl Into<String>, application_key: impl Into<String>) -> Self {
        Self {
            application_id: application_id.into(),
            application_key: application_key.into(),
        }
    }

    pub fn is_valid(&self) -> bool {
        !self.application_id.is_empty() && !self.application_key.is_empty()
    }

    pub fn validate(&self) -> crate::Result<()> {
        if self.is_valid() {
            return Ok(());
        }
        let missing = match (
            self.application_id.is_empty(),
            self.application_key.is_empty(),
        ) {
            (true, true) => "application_id,application_key",
            (true, false) => "application_id",
            _ => "application_key",
        };
        Err(crate::Error::configuration_with_context(
            "invalid application ID or application key",
            crate::ErrorContext::new()
                .with_field_path(missing)
                .with_source("credentials"),
        ))
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("application_id", &self.application_id)
            .field("application_key", &"<redacted>")
            .finish()
    }
}
