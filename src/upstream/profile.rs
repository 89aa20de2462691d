// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use super::{null_as_default, null_items_as_default, DynamicValue};
use serde::Deserialize;

/// A user profile as returned by `user/{id}/profile`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpstreamProfile {
    /// Milliseconds since the Unix epoch
    #[serde(deserialize_with = "null_as_default")]
    pub last_updated: i64,
    #[serde(deserialize_with = "null_items_as_default")]
    pub interests: Vec<UpstreamInterest>,
    #[serde(deserialize_with = "null_items_as_default")]
    pub categories: Vec<UpstreamCategory>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpstreamInterest {
    #[serde(deserialize_with = "null_as_default")]
    pub resource: String,
    #[serde(deserialize_with = "null_as_default")]
    pub label: String,
    #[serde(deserialize_with = "null_as_default")]
    pub weight: f32,
    /// IDs of the activities the interest was inferred from
    #[serde(deserialize_with = "null_items_as_default")]
    pub activities: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpstreamCategory {
    #[serde(deserialize_with = "null_as_default")]
    pub resource: String,
    #[serde(deserialize_with = "null_as_default")]
    pub label: String,
    /// Sent with no fixed type.
    pub weight: DynamicValue,
    #[serde(deserialize_with = "null_items_as_default")]
    pub urls: Vec<String>,
}
