//! Lenient deserialization helpers.
//!
//! YAML authors frequently leave a key present with no value (`resources:`),
//! which arrives as `null`. These helpers treat `null` like a missing key.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};

use crate::types::ResourceSpec;

/// Deserializes `null` as `T::default()`.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Deserializes the resource mapping, accepting `null` for the mapping itself
/// and for individual resource bodies (`users:` with nothing under it).
pub(crate) fn resource_map<'de, D>(
    deserializer: D,
) -> Result<IndexMap<String, ResourceSpec>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<IndexMap<String, Option<ResourceSpec>>>::deserialize(deserializer)?;

    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .map(|(name, spec)| (name, spec.unwrap_or_default()))
        .collect())
}
