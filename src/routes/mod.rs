// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! HTTP route handlers.

pub mod api;

use crate::middleware::add_api_headers;
use crate::AppState;
use axum::http::StatusCode;
use axum::{middleware, routing::get, Json, Router};
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Mount point of the JSON API.
pub const API_PREFIX: &str = "/api/v1";

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "static/js/generated/")
)]
pub struct HealthResponse {
    pub status: String,
    pub build_id: String,
}

/// Health check response
async fn health_check() -> Json<HealthResponse> {
    let build_id = option_env!("BUILD_ID").unwrap_or("unknown").to_string();
    Json(HealthResponse {
        status: "ok".to_string(),
        build_id,
    })
}

/// Build the complete router with all routes.
pub fn create_router(state: Arc<AppState>) -> Router {
    let api_routes = api::routes().layer(middleware::from_fn(add_api_headers));

    let mut app = Router::new()
        .route("/health", get(health_check))
        .nest(API_PREFIX, api_routes);

    if let Some(dir) = &state.config.assets_dir {
        app = app.merge(static_routes(dir));
    }

    app.layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
            .on_response(DefaultOnResponse::new().level(Level::INFO)),
    )
    .with_state(state)
}

/// Web UI: `/static/*` from the assets directory, `index.html` for everything else.
fn static_routes(dir: &Path) -> Router<Arc<AppState>> {
    Router::new()
        .nest_service("/static", ServeDir::new(dir))
        .route("/favicon.ico", get(|| async { StatusCode::NOT_FOUND }))
        .fallback_service(ServeFile::new(dir.join("index.html")))
}
