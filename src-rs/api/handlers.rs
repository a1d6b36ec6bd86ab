use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::json;
use tracing::{debug, error, warn};

use crate::actions::{ActionRegistry, ActionSchema};
use crate::error::ActionError;
use crate::result::ActionResult;

#[derive(Clone)]
pub struct AppState {
    pub name: String,
    pub registry: Arc<ActionRegistry>,
    pub started_at: DateTime<Utc>,
}

/// JSON error body: `{"err", "status", "errors"}`.
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub err: String,
    pub status: u16,
    pub errors: Vec<String>,
}

impl ApiError {
    pub fn new(status: StatusCode, err: &str, errors: Vec<String>) -> Self {
        Self {
            err: err.to_string(),
            status: status.as_u16(),
            errors,
        }
    }

    pub fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "internal server", Vec::new())
    }
}

impl From<ActionError> for ApiError {
    fn from(err: ActionError) -> Self {
        let status = match &err {
            ActionError::NotFound(_) => StatusCode::NOT_FOUND,
            ActionError::BadInput { .. } => StatusCode::BAD_REQUEST,
            ActionError::Registry(_) | ActionError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self::new(status, &err.to_string(), err.errors())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

pub async fn handle_health(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "name": state.name,
        "version": env!("CARGO_PKG_VERSION"),
        "started_at": state.started_at,
    }))
}

pub async fn handle_actions(State(state): State<AppState>) -> Json<Vec<ActionSchema>> {
    Json(state.registry.list())
}

pub async fn handle_action(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    body: String,
) -> Result<Json<ActionResult>, ApiError> {
    debug!(kind = %kind, bytes = body.len(), "running action");
    let registry = state.registry.clone();
    let name = kind.clone();
    let result = tokio::task::spawn_blocking(move || registry.execute(&name, &body)).await;

    match result {
        Ok(Ok(result)) => Ok(Json(result)),
        Ok(Err(err)) => {
            warn!(kind = %kind, error = %err, "action failed");
            Err(ApiError::from(err))
        }
        Err(err) => {
            error!(kind = %kind, error = %err, "action task failed");
            Err(ApiError::internal())
        }
    }
}
