pub use crate::actions::{ActionRegistry, ActionSchema};
pub use crate::config::ServerConfig;
pub use crate::result::ActionResult;

pub mod handlers;
pub mod middleware;
pub mod server;
