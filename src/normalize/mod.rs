// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Translation of upstream records into the domain model.
//!
//! Every function here is pure and total: missing metadata, unparseable dates
//! and mistyped weights fall back to empty/zero values instead of failing.

pub mod activity;
pub mod profile;
pub mod user;

pub use activity::normalize_activity;
pub use profile::normalize_profile;
pub use user::{normalize_user, normalize_user_at, KNOWN_SERVICES};
