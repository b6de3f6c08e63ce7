//! Serde helpers for loosely-shaped catalog payloads.

use serde::{Deserialize, Deserializer};

/// Deserialize an explicit `null` as the type's default value.
///
/// Paired with `#[serde(default)]` so a missing key and a `null` field
/// both come out as the default.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
