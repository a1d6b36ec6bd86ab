use std::process::ExitCode;
use std::sync::Arc;

use lab_console_rs::actions::{register_builtins, ActionRegistry};
use lab_console_rs::api::server::AppServer;
use lab_console_rs::{logging, ServerConfig};
use tracing::error;

#[tokio::main]
async fn main() -> ExitCode {
    logging::init("info");

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!(error = %err, "config error");
            return ExitCode::FAILURE;
        }
    };

    let registry = Arc::new(ActionRegistry::new());
    if let Err(err) = register_builtins(&registry) {
        error!(error = %err, "failed to register actions");
        return ExitCode::FAILURE;
    }

    let server = AppServer::new(config, registry);
    if let Err(err) = server.start().await {
        error!(error = %err, "server error");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
