// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - upstream access and aggregation.

pub mod beancounter;
pub mod charts;

pub use beancounter::{BeancounterApi, BeancounterClient, Credentials};
pub use charts::{build_activity_charts, ActivityCharts};
