use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

pub const CLUSTER_STATUS_ERROR: &str = "Failed to fetch Proxmox cluster status";
pub const STATUS_ERROR: &str = "Failed to fetch server status";
pub const SERVER_NOT_FOUND: &str = "Server not found";
pub const RENDER_ERROR: &str = "Failed to render dashboard";

/// Failures a handler reports to the client.
///
/// An unreachable cluster is not one of these: it is reported as offline
/// records with a `200`.
#[derive(Debug)]
pub enum ApiError {
    NotFound(&'static str),
    Internal { error: &'static str, message: String },
}

impl ApiError {
    pub fn cluster(error: impl std::fmt::Display) -> Self {
        ApiError::Internal {
            error: CLUSTER_STATUS_ERROR,
            message: error.to_string(),
        }
    }

    pub fn simulated(error: impl std::fmt::Display) -> Self {
        ApiError::Internal {
            error: STATUS_ERROR,
            message: error.to_string(),
        }
    }

    pub fn render(error: impl std::fmt::Display) -> Self {
        ApiError::Internal {
            error: RENDER_ERROR,
            message: error.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(error) => {
                (StatusCode::NOT_FOUND, Json(json!({ "error": error }))).into_response()
            }
            ApiError::Internal { error, message } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": error, "message": message })),
            )
                .into_response(),
        }
    }
}
