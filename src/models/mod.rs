// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Canonical domain model exposed to API callers.
//!
//! These types are independent of the upstream platform's JSON quirks and are
//! rebuilt fresh on every request.

pub mod activity;
pub mod chart;
pub mod profile;
pub mod user;

pub use activity::Activity;
pub use chart::{Chart, ChartColumn, ChartRow};
pub use profile::{Topic, TopicKind, UserProfile};
pub use user::{User, UserService};
