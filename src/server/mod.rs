//! HTTP surface: the JSON API and the dashboard page.

pub mod error;
pub mod handlers;
pub mod state;

use crate::{
    HypervisorClient, ValidationError,
    config::Args,
    server::{error::CLUSTER_STATUS_ERROR, state::AppState},
    status::{ClusterStatus, SimulatedStatus},
};
use anyhow::Context;
use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::json;
use std::any::Any;
use std::sync::Arc;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::dashboard_page))
        .route("/refresh", post(handlers::refresh))
        .route("/healthz", get(handlers::healthz))
        .route("/api/ping", get(handlers::ping))
        .route("/api/demo", get(handlers::demo))
        .route("/api/status", get(handlers::status))
        .route("/api/ping/:server_name", get(handlers::ping_server))
        .route("/api/proxmox/status", get(handlers::proxmox_status))
        .route("/api/proxmox/ping/:server_name", get(handlers::proxmox_ping))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown error".to_string()
    };
    error!(%message, "handler panicked");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": CLUSTER_STATUS_ERROR, "message": message })),
    )
        .into_response()
}

/// Builds the live source from the configured targets and starts the
/// dashboard. Configuration errors surface before anything is spawned.
pub fn build_state(args: &Args) -> anyhow::Result<AppState> {
    let config = args.client_config();
    let mut targets = Vec::new();
    for connection in args.connections().context("invalid proxmox configuration")? {
        let client = HypervisorClient::new(connection, &config)
            .context("failed to build proxmox client")?;
        targets.push(Arc::new(client));
    }

    let mut targets = targets.into_iter();
    let Some(primary) = targets.next() else {
        return Err(ValidationError::Field {
            field: "cluster_host".to_string(),
            message: "at least one Proxmox host is required".to_string(),
        })
        .context("invalid proxmox configuration");
    };
    let live = targets.fold(ClusterStatus::new(primary), ClusterStatus::with_target);
    info!(
        cluster_host = %live.primary_host(),
        targets = live.targets().len(),
        "proxmox targets configured"
    );

    AppState::new(
        Arc::new(live),
        Arc::new(SimulatedStatus),
        args.ping_message.as_str(),
        args.poll_interval(),
    )
    .context("failed to compile dashboard template")
}
