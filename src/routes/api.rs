// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Back-office API routes, scoped by customer.

use crate::error::{AppError, Result};
use crate::models::{Activity, Chart, User, UserProfile};
use crate::services::build_activity_charts;
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Longest customer or user ID accepted in a path.
const MAX_PATH_SEGMENT_LEN: usize = 256;

/// API routes, mounted under `/api/v1` in routes/mod.rs.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/{customer}/users", get(list_users))
        .route("/{customer}/users/{id}/profile", get(get_user_profile))
        .route("/{customer}/users/{id}/activities", get(list_activities))
        .route("/{customer}/users/{id}/charts", get(get_profile_charts))
        .fallback(api_not_found)
}

async fn api_not_found() -> AppError {
    AppError::NotFound("no such API method".to_string())
}

fn validate_segment(name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(AppError::BadRequest(format!("'{}' must not be empty", name)));
    }
    if value.len() > MAX_PATH_SEGMENT_LEN {
        return Err(AppError::BadRequest(format!(
            "'{}' longer than {} bytes",
            name, MAX_PATH_SEGMENT_LEN
        )));
    }
    Ok(())
}

// ─── Users ───────────────────────────────────────────────────

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "static/js/generated/")
)]
pub struct ListUsersResponse {
    pub items: Vec<User>,
    /// Always false: the platform returns all users at once.
    pub more: bool,
}

/// List all users of a customer.
async fn list_users(
    State(state): State<Arc<AppState>>,
    Path(customer): Path<String>,
) -> Result<Json<ListUsersResponse>> {
    validate_segment("customer", &customer)?;

    let users = state
        .client
        .list_users(&state.credentials(&customer))
        .await?;

    Ok(Json(ListUsersResponse {
        items: users,
        more: false,
    }))
}

// ─── Profile ─────────────────────────────────────────────────

/// Get the interest profile of a single user.
async fn get_user_profile(
    State(state): State<Arc<AppState>>,
    Path((customer, user_id)): Path<(String, String)>,
) -> Result<Json<UserProfile>> {
    validate_segment("customer", &customer)?;
    validate_segment("id", &user_id)?;

    let profile = state
        .client
        .get_user_profile(&state.credentials(&customer), &user_id)
        .await?;

    Ok(Json(profile))
}

// ─── Activities ──────────────────────────────────────────────

#[derive(Deserialize)]
struct ActivitiesQuery {
    /// Page of older activities; 0 is the most recent.
    page: Option<String>,
}

fn parse_page(page: Option<&str>) -> Result<u32> {
    match page.map(str::trim) {
        None | Some("") => Ok(0),
        Some(raw) => raw.parse().map_err(|_| {
            AppError::BadRequest(
                "Invalid 'page' parameter: must be a non-negative integer".to_string(),
            )
        }),
    }
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "static/js/generated/")
)]
pub struct ListActivitiesResponse {
    pub items: Vec<Activity>,
    pub more: bool,
}

/// Fetch a page of a user's activities, most recent first.
async fn list_activities(
    State(state): State<Arc<AppState>>,
    Path((customer, user_id)): Path<(String, String)>,
    Query(query): Query<ActivitiesQuery>,
) -> Result<Json<ListActivitiesResponse>> {
    validate_segment("customer", &customer)?;
    validate_segment("id", &user_id)?;
    let page = parse_page(query.page.as_deref())?;

    let activities = state
        .client
        .list_activities(&state.credentials(&customer), &user_id, page)
        .await?;

    Ok(Json(ListActivitiesResponse {
        items: activities,
        more: false,
    }))
}

// ─── Charts ──────────────────────────────────────────────────

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "static/js/generated/")
)]
pub struct ChartsResponse {
    pub charts: Vec<Chart>,
}

/// Chart data (per-day and per-verb counts) over the user's latest activities.
async fn get_profile_charts(
    State(state): State<Arc<AppState>>,
    Path((customer, user_id)): Path<(String, String)>,
) -> Result<Json<ChartsResponse>> {
    validate_segment("customer", &customer)?;
    validate_segment("id", &user_id)?;

    let activities = state
        .client
        .list_activities(&state.credentials(&customer), &user_id, 0)
        .await?;

    let charts = build_activity_charts(&activities);
    tracing::debug!(
        activities = activities.len(),
        days = charts.daily.rows.len(),
        verbs = charts.verbs.rows.len(),
        "Built activity charts"
    );

    Ok(Json(ChartsResponse {
        charts: charts.into_vec(),
    }))
}
