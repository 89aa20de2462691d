// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Tabular chart data for simple front-end visualizations.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// A titled, column-typed table of `(label, count)` rows.
///
/// Rows are sorted ascending by label (byte-wise string order).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "static/js/generated/")
)]
pub struct Chart {
    pub title: String,
    pub columns: Vec<ChartColumn>,
    pub rows: Vec<ChartRow>,
}

/// Column name and its chart data type ("date", "string", "number").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "static/js/generated/")
)]
pub struct ChartColumn {
    pub name: String,
    pub typ: String,
}

impl ChartColumn {
    pub fn new(name: &str, typ: &str) -> Self {
        Self {
            name: name.to_string(),
            typ: typ.to_string(),
        }
    }
}

/// One `(label, count)` row; serialized as a two-element JSON array.
pub type ChartRow = (String, u32);
