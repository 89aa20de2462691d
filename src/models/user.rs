// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! User model for the API.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// A platform user, keyed by their service-scoped username.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "static/js/generated/")
)]
pub struct User {
    /// Service-scoped username (not the platform's internal ID)
    pub id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub email: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// Photo of the first linked service that has one
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub photo: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub about: String,
    /// Approximate age in years (0 if unknown)
    #[serde(default, skip_serializing_if = "is_zero")]
    pub age: i64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub gender: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub location: String,
    /// Linked third-party accounts, in fixed service order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub services: Vec<UserService>,
}

/// A linked third-party social network account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "static/js/generated/")
)]
pub struct UserService {
    /// Service identifier ("twitter", "facebook", ...)
    pub name: String,
    pub id: String,
    pub link: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub photo: String,
}

fn is_zero(n: &i64) -> bool {
    *n == 0
}
