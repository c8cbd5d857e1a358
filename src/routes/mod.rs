//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module stitches the host's small JSON API and the service forwarding
//! routes together with Leptos SSR rendering under a single Axum router. The
//! browser never talks to backends directly: every call goes through
//! `/svc/{service}/...` so tokens stay on the host.

pub mod proxy;


use std::path::PathBuf;

use axum::extract::{DefaultBodyLimit, State};
use axum::http::StatusCode;
use axum::routing::{any, get};
use axum::{Json, Router};
use dashboard::net::services::RuntimeConfig;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Largest request body forwarded upstream (homework uploads, file gateway).
pub const MAX_FORWARD_BODY_BYTES: usize = 25 * 1024 * 1024;

/// Host API routes: health, runtime config and service forwarding.
pub(crate) fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/api/runtime-config", get(runtime_config))
        .route("/svc/{service}", any(proxy::forward_root))
        .route("/svc/{service}/{*path}", any(proxy::forward))
        .layer(DefaultBodyLimit::max(MAX_FORWARD_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// API routes + Leptos SSR + compiled assets under `/pkg`.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(dashboard::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || dashboard::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

async fn runtime_config(State(state): State<AppState>) -> Json<RuntimeConfig> {
    Json(state.config.runtime_config())
}
