// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use super::{null_as_default, null_values_as_default};
use serde::Deserialize;
use std::collections::HashMap;

/// A user as returned by `user/all`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpstreamUser {
    /// Platform-internal ID; not exposed.
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    /// Service-scoped username
    #[serde(rename = "username", deserialize_with = "null_as_default")]
    pub service_user_id: String,
    /// Per-service presence flags; only the keys matter.
    #[serde(deserialize_with = "null_as_default")]
    pub services: HashMap<String, serde_json::Value>,
    /// Flat `{service}.user.{field}` metadata.
    #[serde(deserialize_with = "null_values_as_default")]
    pub metadata: HashMap<String, String>,
    #[serde(deserialize_with = "null_as_default")]
    pub customer: String,
}

impl UpstreamUser {
    /// Metadata value for `key`, or "" when absent.
    pub fn meta(&self, key: &str) -> &str {
        self.metadata.get(key).map(String::as_str).unwrap_or("")
    }

    pub fn has_service(&self, service: &str) -> bool {
        self.services.contains_key(service)
    }
}
