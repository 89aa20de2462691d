// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Dynamically-typed upstream fields.

use serde::Deserialize;

/// A field the platform sends with no fixed JSON type.
///
/// Integers and floats stay distinct: `3` is an integer, `3.0` is a float.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum DynamicValue {
    #[default]
    Null,
    Integer(i64),
    Unsigned(u64),
    Float(f64),
    Text(String),
    Other(serde_json::Value),
}

impl DynamicValue {
    /// The value if it was sent as a floating-point number; no coercion.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            DynamicValue::Float(f) => Some(*f),
            _ => None,
        }
    }
}
