// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Record shapes returned by the Beancounter platform API.
//!
//! These mirror the platform's JSON as-is, including its loose typing. Every
//! field is optional on the wire; missing or `null` values decode to defaults
//! so that normalization never has to deal with absent structure. The same
//! holds for `null` elements inside lists and map values.

pub mod activity;
pub mod envelope;
pub mod profile;
pub mod user;
pub mod value;

pub use activity::{UpstreamActivity, UpstreamActivityItem, UpstreamContext, UpstreamObject};
pub use envelope::UpstreamEnvelope;
pub use profile::{UpstreamCategory, UpstreamInterest, UpstreamProfile};
pub use user::UpstreamUser;
pub use value::DynamicValue;

use serde::{Deserialize, Deserializer};
use std::collections::HashMap;

/// Decode `null` as the type's default value.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decode a list whose elements may each be `null`.
pub(crate) fn null_items_as_default<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    let items: Option<Vec<Option<T>>> = Option::deserialize(deserializer)?;
    Ok(items
        .unwrap_or_default()
        .into_iter()
        .map(Option::unwrap_or_default)
        .collect())
}

/// Decode a string-keyed map whose values may each be `null`.
pub(crate) fn null_values_as_default<'de, D, V>(
    deserializer: D,
) -> Result<HashMap<String, V>, D::Error>
where
    D: Deserializer<'de>,
    V: Default + Deserialize<'de>,
{
    let map: Option<HashMap<String, Option<V>>> = Option::deserialize(deserializer)?;
    Ok(map
        .unwrap_or_default()
        .into_iter()
        .map(|(key, value)| (key, value.unwrap_or_default()))
        .collect())
}
