//! Entity extraction types.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use super::de::null_as_default;

/// Document whose entities should be extracted. Either `text` or `url` is required.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntitiesParams {
    pub url: Option<String>,
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntitiesResponse {
    pub text: String,
    /// Entity type (e.g. `person`, `location`) to the mentions found.
    #[serde(deserialize_with = "null_as_default")]
    pub entities: HashMap<String, Vec<String>>,
}

impl_text_or_url!(EntitiesParams);
