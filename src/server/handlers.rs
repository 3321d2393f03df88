use crate::{
    PingResult, StatusReport,
    server::{
        error::{ApiError, SERVER_NOT_FOUND},
        state::AppState,
    },
};
use axum::{
    Json,
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect},
};
use chrono::Utc;
use serde_json::{Value, json};
use tracing::error;

pub const DEMO_MESSAGE: &str = "Hello from the status service";

pub async fn ping(State(st): State<AppState>) -> Json<Value> {
    Json(json!({ "message": &*st.ping_message }))
}

pub async fn demo() -> Json<Value> {
    Json(json!({ "message": DEMO_MESSAGE }))
}

pub async fn healthz() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn status(State(st): State<AppState>) -> Result<Json<StatusReport>, ApiError> {
    st.simulated
        .fetch_status()
        .await
        .map(Json)
        .map_err(ApiError::simulated)
}

pub async fn ping_server(
    State(st): State<AppState>,
    Path(server_name): Path<String>,
) -> Result<Json<PingResult>, ApiError> {
    match st.simulated.ping(&server_name).await {
        Ok(Some(result)) => Ok(Json(result)),
        Ok(None) => Err(ApiError::NotFound(SERVER_NOT_FOUND)),
        Err(e) => Err(ApiError::simulated(e)),
    }
}

pub async fn proxmox_status(State(st): State<AppState>) -> Result<Json<StatusReport>, ApiError> {
    match st.live.fetch_status().await {
        Ok(report) => Ok(Json(report)),
        Err(e) => {
            error!(error = %e, "error building proxmox status");
            Err(ApiError::cluster(e))
        }
    }
}

pub async fn proxmox_ping(
    State(st): State<AppState>,
    Path(server_name): Path<String>,
) -> Result<Json<PingResult>, ApiError> {
    match st.live.ping(&server_name).await {
        Ok(Some(result)) => Ok(Json(result)),
        Ok(None) => Err(ApiError::NotFound(SERVER_NOT_FOUND)),
        Err(e) => {
            // Upstream failures are still a 200 with an offline result.
            Ok(Json(PingResult::offline(
                server_name,
                Some(e.to_string()),
                Utc::now(),
            )))
        }
    }
}

pub async fn dashboard_page(State(st): State<AppState>) -> Result<Html<String>, ApiError> {
    let view = st.dashboard.snapshot();
    st.pages
        .render(&view, &st.links, st.dashboard.interval(), Utc::now())
        .map(Html)
        .map_err(|e| {
            error!(error = %e, "error rendering dashboard");
            ApiError::render(e)
        })
}

pub async fn refresh(State(st): State<AppState>) -> impl IntoResponse {
    st.dashboard.refresh_now();
    Redirect::to("/")
}
