//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the auth API and the Leptos SSR pages under a single
//! Axum router, with the edge guard layered in front of everything. The
//! guard itself skips API routes, compiled assets, the favicon and the
//! health probe.

pub mod auth;
pub mod edge;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::middleware;
use axum::routing::{get, post};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// JSON auth API consumed by the hydrated client.
pub(crate) fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/auth/session", get(auth::session))
        .route("/api/auth/sign-in", post(auth::sign_in))
        .route("/api/auth/sign-up", post(auth::sign_up))
        .route("/api/auth/refresh", post(auth::refresh))
        .route("/api/auth/sign-out", post(auth::sign_out))
        .route("/healthz", get(healthz))
        .with_state(state)
}

/// Put the edge guard in front of every route and the fallback.
pub(crate) fn with_edge_guard(router: Router, state: AppState) -> Router {
    router.layer(middleware::from_fn_with_state(state, edge::guard))
}

/// Full application: auth API + Leptos SSR pages + static assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing
/// `LEPTOS_*` environment or `[package.metadata.leptos]` section).
pub fn app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root = PathBuf::from(leptos_options.site_root.as_ref());

    let router = api_routes(state.clone())
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .nest_service("/assets", ServeDir::new(site_root.join("assets")))
        .route_service("/favicon.ico", ServeFile::new(site_root.join("favicon.ico")))
        .fallback(not_found);

    Ok(with_edge_guard(router, state)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Page not found.")
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
