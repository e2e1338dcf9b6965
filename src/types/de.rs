//! Field deserializers shared by the response types.

use serde::{Deserialize, Deserializer};

/// Decode an explicit `null` the same as a missing field.
///
/// The service sends empty lists and maps as `null`.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
