use std::net::TcpListener;
use std::sync::Arc;

use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use chrono::Utc;
use tracing::info;

use crate::actions::ActionRegistry;
use crate::api::handlers::{handle_action, handle_actions, handle_health, AppState};
use crate::api::middleware::log_requests;
use crate::config::ServerConfig;
use crate::error::ServerError;

pub struct AppServer {
    pub config: ServerConfig,
    pub state: AppState,
}

impl AppServer {
    pub fn new(config: ServerConfig, registry: Arc<ActionRegistry>) -> Self {
        let state = AppState {
            name: config.name.clone(),
            registry,
            started_at: Utc::now(),
        };
        Self { config, state }
    }

    pub fn router(&self) -> Router {
        Router::new()
            .route("/health", get(handle_health))
            .route("/actions", get(handle_actions))
            .route("/api/:kind", post(handle_action))
            .layer(middleware::from_fn(log_requests))
            .with_state(self.state.clone())
    }

    pub async fn start(&self) -> Result<(), ServerError> {
        let addr = self.config.bind_addr();
        let listener = TcpListener::bind(&addr).map_err(|source| ServerError::Bind {
            addr: addr.clone(),
            source,
        })?;
        info!(addr = %addr, name = %self.config.name, "listening");
        self.serve_listener(listener).await
    }

    /// Serves on an already bound listener.
    pub async fn serve_listener(&self, listener: TcpListener) -> Result<(), ServerError> {
        listener
            .set_nonblocking(true)
            .map_err(|err| ServerError::Serve(err.to_string()))?;
        axum::Server::from_tcp(listener)
            .map_err(|err| ServerError::Serve(err.to_string()))?
            .serve(self.router().into_make_service())
            .await
            .map_err(|err| ServerError::Serve(err.to_string()))
    }
}
