// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! User interest profile model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Interest profile of a single user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "static/js/generated/")
)]
pub struct UserProfile {
    pub updated: DateTime<Utc>,
    /// Interest-derived topics first, then category-derived ones.
    pub topics: Vec<Topic>,
}

/// Where a topic came from.
///
/// The external labels are swapped relative to their source: upstream
/// interests are exposed as `"topic"`, upstream categories as `"interest"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "static/js/generated/")
)]
#[serde(rename_all = "lowercase")]
pub enum TopicKind {
    /// Derived from an upstream interest
    Topic,
    /// Derived from an upstream category
    Interest,
}

/// A weighted interest or category associated with a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "static/js/generated/")
)]
pub struct Topic {
    pub kind: TopicKind,
    pub resource: String,
    pub label: String,
    pub weight: f32,
    /// Only set for category-derived topics
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub urls: Vec<String>,
    /// Activity IDs; only set for interest-derived topics
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub activities: Vec<String>,
}
