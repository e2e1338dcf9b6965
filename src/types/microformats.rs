//! hCard microformat types.
//!
//! See <http://microformats.org/wiki/hcard>.

use serde::{Deserialize, Serialize};
use super::de::null_as_default;

/// Page to scan for microformats. Only a URL is accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MicroformatsParams {
    pub url: Option<String>,
}

impl MicroformatsParams {
    pub fn url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
        }
    }
}

/// hCard `adr`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Address {
    pub id: String,
    pub street_address: String,
    pub locality: String,
    pub region: String,
    pub country_name: String,
    pub postal_code: String,
}

/// hCard `n`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Name {
    pub id: String,
    pub honorific_prefix: String,
    pub given_name: String,
    pub additional_name: String,
    pub family_name: String,
    pub honorific_suffix: String,
}

/// hCard `geo`. Coordinates are kept as the strings the page declared.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Location {
    pub id: String,
    pub latitude: String,
    pub longitude: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HCard {
    pub id: String,
    pub full_name: String,
    pub structured_name: Name,
    pub nick_name: String,
    pub email: String,
    pub photo: String,
    pub url: String,
    pub telephone_number: String,
    pub birthday: String,
    pub category: String,
    pub note: String,
    pub logo: String,
    pub location: Location,
    pub address: Address,
    pub organization: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MicroformatsResponse {
    #[serde(rename = "hCards")]
    #[serde(deserialize_with = "null_as_default")]
    pub hcards: Vec<HCard>,
}
