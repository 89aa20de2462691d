// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Beancounter Office: back-office API for the Beancounter platform
//!
//! This crate fronts the Beancounter social-aggregation platform, normalizing
//! its user, profile and activity records into a stable domain model and
//! deriving simple chart data from user activities.

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod normalize;
pub mod routes;
pub mod services;
pub mod time_utils;
pub mod upstream;

use config::Config;
use services::{BeancounterApi, Credentials};
use std::sync::Arc;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub client: Arc<dyn BeancounterApi>,
}

impl AppState {
    /// Credentials for calls made on behalf of `customer`.
    pub fn credentials(&self, customer: &str) -> Credentials {
        Credentials {
            customer: customer.to_string(),
            api_key: self.config.bc_api_key.clone(),
        }
    }
}
